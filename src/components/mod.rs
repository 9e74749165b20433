//! Built-in components: Button, Input, Heading, Paragraph, Text, Container, List.

pub mod button;
pub mod container;
pub mod heading;
pub mod input;
pub mod list;
pub mod paragraph;
pub mod text;

pub use button::Button;
pub use container::Container;
pub use heading::Heading;
pub use input::Input;
pub use list::List;
pub use paragraph::Paragraph;
pub use text::Text;
