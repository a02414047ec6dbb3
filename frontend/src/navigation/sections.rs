use std::fmt;
use std::str::FromStr;

use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::NodeRef;

/// Anchorable sections of the landing page, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    Features,
    How,
    Pricing,
    Faq,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::Features,
        SectionId::How,
        SectionId::Pricing,
        SectionId::Faq,
    ];

    /// The DOM id of the section element, also used as the URL fragment.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Features => "features",
            SectionId::How => "how",
            SectionId::Pricing => "pricing",
            SectionId::Faq => "faq",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::Features => "Features",
            SectionId::How => "How",
            SectionId::Pricing => "Pricing",
            SectionId::Faq => "FAQ",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section id: {0:?}")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Something the viewport can be scrolled to.
pub trait ScrollTarget {
    /// Align the target's top edge with the top of the viewport.
    fn scroll_to_top(&self);
}

impl ScrollTarget for Element {
    fn scroll_to_top(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        self.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Ordered section -> target mapping, filled once when the page mounts.
#[derive(Debug, Clone)]
pub struct SectionRegistry<T> {
    targets: Vec<(SectionId, T)>,
}

impl<T> Default for SectionRegistry<T> {
    fn default() -> Self {
        Self {
            targets: Vec::new(),
        }
    }
}

impl<T> SectionRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `target` for `id`, replacing any earlier target for the same section.
    pub fn register(&mut self, id: SectionId, target: T) {
        match self.targets.iter_mut().find(|(existing, _)| *existing == id) {
            Some(slot) => slot.1 = target,
            None => self.targets.push((id, target)),
        }
    }

    pub fn get(&self, id: SectionId) -> Option<&T> {
        self.targets
            .iter()
            .find(|(existing, _)| *existing == id)
            .map(|(_, target)| target)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionId, &T)> {
        self.targets.iter().map(|(id, target)| (*id, target))
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl<T> FromIterator<(SectionId, T)> for SectionRegistry<T> {
    fn from_iter<I: IntoIterator<Item = (SectionId, T)>>(iter: I) -> Self {
        let mut registry = SectionRegistry::new();
        for (id, target) in iter {
            registry.register(id, target);
        }
        registry
    }
}

/// Node refs handed to the section elements while rendering.
#[derive(Clone, PartialEq, Default)]
pub struct SectionRefs {
    pub home: NodeRef,
    pub features: NodeRef,
    pub how: NodeRef,
    pub pricing: NodeRef,
    pub faq: NodeRef,
}

impl SectionRefs {
    pub fn get(&self, id: SectionId) -> &NodeRef {
        match id {
            SectionId::Home => &self.home,
            SectionId::Features => &self.features,
            SectionId::How => &self.how,
            SectionId::Pricing => &self.pricing,
            SectionId::Faq => &self.faq,
        }
    }

    /// Builds the registry from whatever sections actually mounted.
    pub fn to_registry(&self) -> SectionRegistry<Element> {
        SectionId::ALL
            .into_iter()
            .filter_map(|id| match self.get(id).cast::<Element>() {
                Some(element) => Some((id, element)),
                None => {
                    log::debug!("section {} is not mounted, skipping", id);
                    None
                }
            })
            .collect()
    }
}

/// Scrolls to the section named by `raw_id`.
///
/// Returns the section when a scroll was started. Unknown ids and sections without a
/// registered target are a silent no-op; the caller closes the mobile menu only on `Some`.
pub fn navigate_to<T: ScrollTarget>(registry: &SectionRegistry<T>, raw_id: &str) -> Option<SectionId> {
    let id = raw_id.parse::<SectionId>().ok()?;
    let target = registry.get(id)?;
    target.scroll_to_top();
    log::info!("navigating to section {}", id);
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct CountingTarget {
        scrolls: Cell<u32>,
    }

    impl ScrollTarget for CountingTarget {
        fn scroll_to_top(&self) {
            self.scrolls.set(self.scrolls.get() + 1);
        }
    }

    #[test]
    fn ids_round_trip_through_their_dom_names() {
        for id in SectionId::ALL {
            assert_eq!(id.as_str().parse::<SectionId>(), Ok(id));
        }
    }

    #[test]
    fn parsing_is_exact() {
        assert!("Home".parse::<SectionId>().is_err());
        assert!(" faq".parse::<SectionId>().is_err());
        assert_eq!(
            "howit works".parse::<SectionId>(),
            Err(UnknownSection("howit works".to_string()))
        );
    }

    #[test]
    fn register_replaces_existing_target_and_keeps_order() {
        let mut registry = SectionRegistry::new();
        registry.register(SectionId::Faq, 1);
        registry.register(SectionId::Home, 2);
        registry.register(SectionId::Faq, 3);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(SectionId::Faq), Some(&3));
        let order: Vec<_> = registry.iter().map(|(id, _)| id).collect();
        assert_eq!(order, vec![SectionId::Faq, SectionId::Home]);
    }

    #[test]
    fn navigate_scrolls_only_the_named_target() {
        let registry: SectionRegistry<CountingTarget> = SectionId::ALL
            .into_iter()
            .map(|id| (id, CountingTarget::default()))
            .collect();

        assert_eq!(navigate_to(&registry, "pricing"), Some(SectionId::Pricing));
        for (id, target) in registry.iter() {
            let expected = u32::from(id == SectionId::Pricing);
            assert_eq!(target.scrolls.get(), expected, "{id}");
        }
    }

    #[test]
    fn navigate_ignores_unknown_ids() {
        let registry: SectionRegistry<CountingTarget> = SectionId::ALL
            .into_iter()
            .map(|id| (id, CountingTarget::default()))
            .collect();

        for raw in ["", "contact", "FAQ", "#faq"] {
            assert_eq!(navigate_to(&registry, raw), None);
        }
        assert!(registry.iter().all(|(_, t)| t.scrolls.get() == 0));
    }

    #[test]
    fn navigate_skips_sections_that_never_mounted() {
        let mut registry = SectionRegistry::new();
        registry.register(SectionId::Home, CountingTarget::default());

        assert_eq!(navigate_to(&registry, "faq"), None);
        assert_eq!(navigate_to(&registry, "home"), Some(SectionId::Home));
    }
}
