//! html! macro: parse JSX-like markup and generate flowdom VNode builder code.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};
use syn::{braced, Error, Expr, Ident, LitStr, Result, Token};

// ---------------------------------------------------------------------------
// AST types
// ---------------------------------------------------------------------------

/// A tag or attribute name. Dashes are allowed (`data-id`, `my-widget`) and
/// keywords are accepted as-is (`type`).
#[derive(Clone)]
pub(crate) struct Name {
    pub text: String,
    pub span: Span,
}

impl std::fmt::Debug for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// The right-hand side of `name=...`.
#[derive(Clone)]
pub(crate) enum AttrValue {
    Lit(LitStr),
    Expr(Expr),
    /// Bare attribute: `<button disabled>` means `disabled="disabled"`.
    Flag,
}

/// Which handler shape an event binding registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Binding {
    /// `on:event={|| ..}`
    Plain,
    /// `onvalue:event={|value: String| ..}`
    Value,
}

/// A parsed attribute or event binding.
#[derive(Clone)]
pub(crate) enum Attribute {
    Attr { name: Name, value: AttrValue },
    Event { binding: Binding, event: Name, handler: Expr },
}

/// A parsed markup node.
#[derive(Clone)]
pub(crate) enum Node {
    Element(Element),
    Text(LitStr),
    /// `{expr}`: any `Into<VNode>`.
    Expr(Expr),
    /// `{..expr}`: any `IntoIterator<Item = VNode>`, spliced in place.
    Spread(Expr),
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Element(elem) => elem.fmt(f),
            Node::Text(lit) => write!(f, "Text({:?})", lit.value()),
            Node::Expr(_) => f.write_str("Expr(..)"),
            Node::Spread(_) => f.write_str("Spread(..)"),
        }
    }
}

/// A parsed element: `<tag attrs... />` or `<tag attrs...> children </tag>`.
#[derive(Clone)]
pub(crate) struct Element {
    pub tag: Name,
    pub attrs: Vec<Attribute>,
    pub children: Vec<Node>,
    pub self_closing: bool,
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag)
            .field("attrs", &self.attrs.len())
            .field("children", &self.children.len())
            .field("self_closing", &self.self_closing)
            .finish()
    }
}

/// The top-level html! input: exactly one root node.
struct HtmlInput {
    root: Node,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

impl Parse for HtmlInput {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.is_empty() {
            return Err(Error::new(
                Span::call_site(),
                "html! expects exactly one root node",
            ));
        }
        let root = parse_node(input)?;
        if !input.is_empty() {
            return Err(input.error("html! expects exactly one root node; wrap siblings in an element"));
        }
        Ok(HtmlInput { root })
    }
}

/// Parse a dashed name, e.g. `aria-label`.
pub(crate) fn parse_name(input: ParseStream) -> Result<Name> {
    let first = Ident::parse_any(input)?.unraw();
    let span = first.span();
    let mut text = first.to_string();
    while input.peek(Token![-]) {
        input.parse::<Token![-]>()?;
        text.push('-');
        text.push_str(&Ident::parse_any(input)?.unraw().to_string());
    }
    Ok(Name { text, span })
}

/// Parse one node: an element, a string literal, or a braced expression.
pub(crate) fn parse_node(input: ParseStream) -> Result<Node> {
    if input.peek(Token![<]) {
        return parse_element(input).map(Node::Element);
    }
    if input.peek(LitStr) {
        return input.parse().map(Node::Text);
    }
    if input.peek(syn::token::Brace) {
        let content;
        braced!(content in input);
        if content.peek(Token![..]) {
            content.parse::<Token![..]>()?;
            return content.parse().map(Node::Spread);
        }
        return content.parse().map(Node::Expr);
    }
    Err(input.error("expected an element, a string literal, or `{expr}`"))
}

fn parse_attribute(input: ParseStream) -> Result<Attribute> {
    let name = parse_name(input)?;

    let binding = match name.text.as_str() {
        "on" => Some(Binding::Plain),
        "onvalue" => Some(Binding::Value),
        _ => None,
    };
    if let (Some(binding), true) = (binding, input.peek(Token![:])) {
        input.parse::<Token![:]>()?;
        let event = parse_name(input)?;
        input.parse::<Token![=]>()?;
        let content;
        braced!(content in input);
        let handler: Expr = content.parse()?;
        return Ok(Attribute::Event {
            binding,
            event,
            handler,
        });
    }

    if !input.peek(Token![=]) {
        return Ok(Attribute::Attr {
            name,
            value: AttrValue::Flag,
        });
    }
    input.parse::<Token![=]>()?;
    let value = if input.peek(LitStr) {
        AttrValue::Lit(input.parse()?)
    } else if input.peek(syn::token::Brace) {
        let content;
        braced!(content in input);
        AttrValue::Expr(content.parse()?)
    } else {
        return Err(input.error("expected a string literal or `{expr}` attribute value"));
    };
    Ok(Attribute::Attr { name, value })
}

/// Parse a single element from the token stream.
pub(crate) fn parse_element(input: ParseStream) -> Result<Element> {
    input.parse::<Token![<]>()?;
    let tag = parse_name(input)?;

    let mut attrs = Vec::new();
    loop {
        if input.peek(Token![/]) {
            input.parse::<Token![/]>()?;
            input.parse::<Token![>]>()?;
            return Ok(Element {
                tag,
                attrs,
                children: Vec::new(),
                self_closing: true,
            });
        }
        if input.peek(Token![>]) {
            input.parse::<Token![>]>()?;
            break;
        }
        if input.is_empty() {
            return Err(Error::new(tag.span, format!("unclosed tag `<{}`", tag.text)));
        }
        attrs.push(parse_attribute(input)?);
    }

    let mut children = Vec::new();
    loop {
        if input.peek(Token![<]) && input.peek2(Token![/]) {
            input.parse::<Token![<]>()?;
            input.parse::<Token![/]>()?;
            let closing = parse_name(input)?;
            if closing.text != tag.text {
                return Err(Error::new(
                    closing.span,
                    format!(
                        "mismatched closing tag: expected `</{}>`, found `</{}>`",
                        tag.text, closing.text
                    ),
                ));
            }
            input.parse::<Token![>]>()?;
            break;
        }
        if input.is_empty() {
            return Err(Error::new(
                tag.span,
                format!("missing closing tag `</{}>`", tag.text),
            ));
        }
        children.push(parse_node(input)?);
    }

    Ok(Element {
        tag,
        attrs,
        children,
        self_closing: false,
    })
}

// ---------------------------------------------------------------------------
// Code generation
// ---------------------------------------------------------------------------

/// Generate an `Element` builder expression.
fn generate_element(elem: &Element) -> TokenStream {
    let tag = &elem.tag.text;
    let mut calls = Vec::new();

    for attr in &elem.attrs {
        match attr {
            Attribute::Attr { name, value } => {
                let name = &name.text;
                let value = match value {
                    AttrValue::Lit(lit) => quote! { #lit },
                    AttrValue::Expr(expr) => quote! { #expr },
                    AttrValue::Flag => quote! { #name },
                };
                calls.push(quote! { .attr(#name, #value) });
            }
            Attribute::Event {
                binding,
                event,
                handler,
            } => {
                let event = &event.text;
                calls.push(match binding {
                    Binding::Plain => quote! { .on(#event, #handler) },
                    Binding::Value => quote! { .on_value(#event, #handler) },
                });
            }
        }
    }

    for child in &elem.children {
        calls.push(match child {
            Node::Spread(expr) => quote! { .children(#expr) },
            other => {
                let code = generate_node(other);
                quote! { .child(#code) }
            }
        });
    }

    quote! {
        ::flowdom::vdom::Element::new(#tag) #(#calls)*
    }
}

/// Generate a `VNode` expression.
fn generate_node(node: &Node) -> TokenStream {
    match node {
        Node::Element(elem) => {
            let code = generate_element(elem);
            quote! { ::flowdom::vdom::VNode::from(#code) }
        }
        Node::Text(lit) => quote! { ::flowdom::vdom::VNode::text(#lit) },
        Node::Expr(expr) => quote! { ::flowdom::vdom::VNode::from(#expr) },
        Node::Spread(expr) => {
            Error::new_spanned(expr, "`{..expr}` is only allowed inside an element").to_compile_error()
        }
    }
}

/// Entry point: generate code for the entire html! macro.
pub(crate) fn html_impl(input: TokenStream) -> Result<TokenStream> {
    let parsed: HtmlInput = syn::parse2(input)?;
    if let Node::Spread(expr) = &parsed.root {
        return Err(Error::new_spanned(
            expr,
            "`{..expr}` is only allowed inside an element",
        ));
    }
    let code = generate_node(&parsed.root);
    Ok(quote! { { #code } })
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    // Helper: parse a token stream into its root node.
    fn parse_root(tokens: TokenStream) -> Result<Node> {
        syn::parse2::<HtmlInput>(tokens).map(|h| h.root)
    }

    // Helper: parse a token stream whose root must be an element.
    fn parse_single_element(tokens: TokenStream) -> Element {
        match parse_root(tokens).unwrap() {
            Node::Element(elem) => elem,
            _ => panic!("expected an element root"),
        }
    }

    fn attr_name(attr: &Attribute) -> &str {
        match attr {
            Attribute::Attr { name, .. } => &name.text,
            Attribute::Event { event, .. } => &event.text,
        }
    }

    // -----------------------------------------------------------------------
    // Parsing tests
    // -----------------------------------------------------------------------

    #[test]
    fn parse_self_closing_element() {
        let elem = parse_single_element(quote! { <input type="text" /> });
        assert_eq!(elem.tag.text, "input");
        assert!(elem.self_closing);
        assert_eq!(elem.attrs.len(), 1);
        assert_eq!(attr_name(&elem.attrs[0]), "type");
    }

    #[test]
    fn parse_element_with_children() {
        let elem = parse_single_element(quote! {
            <div class="card">
                <h1>"Title"</h1>
                "loose text"
                {body}
            </div>
        });
        assert_eq!(elem.tag.text, "div");
        assert!(!elem.self_closing);
        assert_eq!(elem.children.len(), 3);
        assert!(matches!(elem.children[0], Node::Element(_)));
        assert!(matches!(elem.children[1], Node::Text(_)));
        assert!(matches!(elem.children[2], Node::Expr(_)));
    }

    #[test]
    fn parse_dashed_names() {
        let elem = parse_single_element(quote! { <my-widget data-item-id="7" /> });
        assert_eq!(elem.tag.text, "my-widget");
        assert_eq!(attr_name(&elem.attrs[0]), "data-item-id");
    }

    #[test]
    fn parse_event_bindings() {
        let elem = parse_single_element(quote! {
            <input on:focus={|| ()} onvalue:change={|v: String| drop(v)} />
        });
        match &elem.attrs[0] {
            Attribute::Event { binding, event, .. } => {
                assert_eq!(*binding, Binding::Plain);
                assert_eq!(event.text, "focus");
            }
            _ => panic!("expected event binding"),
        }
        match &elem.attrs[1] {
            Attribute::Event { binding, event, .. } => {
                assert_eq!(*binding, Binding::Value);
                assert_eq!(event.text, "change");
            }
            _ => panic!("expected event binding"),
        }
    }

    #[test]
    fn attribute_named_on_without_colon_is_plain() {
        let elem = parse_single_element(quote! { <div on="yes" /> });
        assert!(matches!(elem.attrs[0], Attribute::Attr { .. }));
    }

    #[test]
    fn parse_flag_attribute() {
        let elem = parse_single_element(quote! { <button disabled>"x"</button> });
        assert!(matches!(
            elem.attrs[0],
            Attribute::Attr {
                value: AttrValue::Flag,
                ..
            }
        ));
    }

    #[test]
    fn parse_spread_child() {
        let elem = parse_single_element(quote! { <ul>{..items}</ul> });
        assert!(matches!(elem.children[0], Node::Spread(_)));
    }

    #[test]
    fn parse_text_root() {
        assert!(matches!(parse_root(quote! { "just text" }).unwrap(), Node::Text(_)));
    }

    #[test]
    fn parse_error_mismatched_closing_tag() {
        let err = parse_root(quote! { <div><p>"x"</p></span> }).unwrap_err();
        assert!(err.to_string().contains("mismatched closing tag"));
    }

    #[test]
    fn parse_error_missing_closing_tag() {
        let err = parse_root(quote! { <div><p>"x"</p> }).unwrap_err();
        assert!(err.to_string().contains("missing closing tag"));
    }

    #[test]
    fn parse_error_multiple_roots() {
        let err = parse_root(quote! { <p /> <p /> }).unwrap_err();
        assert!(err.to_string().contains("exactly one root"));
    }

    #[test]
    fn parse_error_empty() {
        assert!(parse_root(quote! {}).is_err());
    }

    #[test]
    fn parse_error_bad_attribute_value() {
        let err = parse_root(quote! { <div class=3 /> }).unwrap_err();
        assert!(err.to_string().contains("attribute value"));
    }

    // -----------------------------------------------------------------------
    // Code generation tests
    // -----------------------------------------------------------------------

    #[test]
    fn codegen_element_with_attrs() {
        let code = html_impl(quote! { <p class="lead" id={name}>"Hi"</p> })
            .unwrap()
            .to_string();
        assert!(code.contains("Element :: new (\"p\")"), "{code}");
        assert!(code.contains(". attr (\"class\" , \"lead\")"), "{code}");
        assert!(code.contains(". attr (\"id\" , name)"), "{code}");
        assert!(code.contains("VNode :: text (\"Hi\")"), "{code}");
    }

    #[test]
    fn codegen_keyword_attribute() {
        let code = html_impl(quote! { <input type="checkbox" /> }).unwrap().to_string();
        assert!(code.contains(". attr (\"type\" , \"checkbox\")"), "{code}");
    }

    #[test]
    fn codegen_flag_attribute() {
        let code = html_impl(quote! { <button disabled /> }).unwrap().to_string();
        assert!(code.contains(". attr (\"disabled\" , \"disabled\")"), "{code}");
    }

    #[test]
    fn codegen_events() {
        let code = html_impl(quote! {
            <input on:click={go} onvalue:input={set} />
        })
        .unwrap()
        .to_string();
        assert!(code.contains(". on (\"click\" , go)"), "{code}");
        assert!(code.contains(". on_value (\"input\" , set)"), "{code}");
    }

    #[test]
    fn codegen_children_in_order() {
        let code = html_impl(quote! { <ul><li>"a"</li>{extra}{..rest}</ul> })
            .unwrap()
            .to_string();
        let li = code.find("Element :: new (\"li\")").unwrap();
        let extra = code.find("VNode :: from (extra)").unwrap();
        let rest = code.find(". children (rest)").unwrap();
        assert!(li < extra && extra < rest, "{code}");
    }

    #[test]
    fn codegen_expr_root() {
        let code = html_impl(quote! { {button.render()} }).unwrap().to_string();
        assert!(code.contains("VNode :: from (button . render ())"), "{code}");
    }

    #[test]
    fn codegen_spread_root_is_error() {
        let err = html_impl(quote! { {..items} }).unwrap_err();
        assert!(err.to_string().contains("only allowed inside an element"));
    }
}
