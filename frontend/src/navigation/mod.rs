pub mod scroll_spy;
pub mod sections;

pub use scroll_spy::{ScrollSpy, SectionObserver};
pub use sections::{navigate_to, ScrollTarget, SectionId, SectionRefs, SectionRegistry, UnknownSection};
