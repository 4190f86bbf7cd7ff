pub mod button;
pub mod counter;
pub mod layout;

pub use button::Button;
pub use counter::Counter;
pub use layout::Layout;
