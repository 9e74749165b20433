//! Proc macros for flowdom: `html!` markup for virtual node trees.
//!
//! This crate is not meant to be used directly; enable the `macros` feature on `flowdom`.

use proc_macro::TokenStream;

mod html_macro;

/// JSX-like markup that builds a `flowdom::vdom::VNode`.
///
/// # Syntax
///
/// - `<tag attr="value"> ... </tag>` or `<tag />`: an element
/// - `"text"`: a text node
/// - `{expr}`: any `Into<VNode>`, e.g. a rendered component
/// - `{..expr}`: splice an iterator of `VNode`s into the children
///
/// # Attributes
///
/// - `name="value"` or `name={expr}` (any `ToString`) sets an attribute
/// - a bare `name` sets `name="name"`, e.g. `disabled`
/// - `on:event={handler}` binds a zero-argument handler
/// - `onvalue:event={handler}` binds a handler receiving the target's value
///
/// Names may contain dashes (`data-id`) and may be keywords (`type`).
///
/// # Example
///
/// ```ignore
/// let node = html! {
///     <div class="card">
///         <h1>"Hello"</h1>
///         <input type="text" onvalue:change={move |v| println!("{v}")} />
///         <button on:click={|| println!("clicked")}>"Send"</button>
///     </div>
/// };
/// ```
#[proc_macro]
pub fn html(input: TokenStream) -> TokenStream {
    html_macro::html_impl(input.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
