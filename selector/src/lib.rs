pub mod buffer;
pub mod element;
pub mod event;
pub mod focus;
pub mod hit;
pub mod layout;
pub mod listener;
pub mod option;
pub mod render;
pub mod selection;
pub mod terminal;
pub mod theme;
pub mod widget;

pub use buffer::{Buffer, Cell};
pub use element::{find_element, Content, Element};
pub use event::{Event, EventResult, Key, Modifiers, MouseButton};
pub use focus::{collect_focusable, FocusState};
pub use hit::{hit_test, hit_test_any, hit_test_focusable};
pub use layout::{layout, LayoutResult, Rect};
pub use listener::{KeyListeners, ListenerGuard};
pub use option::{OptionValue, SelectOption};
pub use selection::Selection;
pub use terminal::Terminal;
pub use theme::{Color, ColorParseError, Region, Rgb, Style, Theme};
pub use widget::{collides, Part, Props, Selector};
