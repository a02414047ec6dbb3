use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::Callback;

use super::sections::{SectionId, SectionRegistry};
use crate::config::SCROLL_SPY_THRESHOLD;

/// Derives the active section from viewport intersection reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSpy {
    threshold: f64,
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::new(SCROLL_SPY_THRESHOLD)
    }
}

impl ScrollSpy {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// A single report: the section becomes active once `ratio` reaches the threshold.
    pub fn on_visibility_change(&self, raw_id: &str, ratio: f64) -> Option<SectionId> {
        if ratio < self.threshold {
            return None;
        }
        raw_id.parse().ok()
    }

    /// Resolves one observer batch to at most one section.
    ///
    /// The most visible qualifying section wins. On equal ratios the entry reported last wins.
    pub fn resolve_batch<'a, I>(&self, changes: I) -> Option<SectionId>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut best: Option<(SectionId, f64)> = None;
        for (raw_id, ratio) in changes {
            let Some(id) = self.on_visibility_change(raw_id, ratio) else {
                continue;
            };
            match best {
                Some((_, best_ratio)) if ratio < best_ratio => {}
                _ => best = Some((id, ratio)),
            }
        }
        best.map(|(id, _)| id)
    }
}

/// Browser side of the scroll-spy: one `IntersectionObserver` over every registered section.
///
/// Dropping it unobserves every target and disconnects, so no callback outlives the page.
pub struct SectionObserver {
    observer: IntersectionObserver,
    targets: Vec<Element>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl SectionObserver {
    pub fn observe(
        registry: &SectionRegistry<Element>,
        spy: ScrollSpy,
        on_active: Callback<SectionId>,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                let changes: Vec<(String, f64)> = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .filter(|entry| entry.is_intersecting())
                    .map(|entry| (entry.target().id(), entry.intersection_ratio()))
                    .collect();
                let active = spy.resolve_batch(
                    changes.iter().map(|(id, ratio)| (id.as_str(), *ratio)),
                );
                if let Some(id) = active {
                    log::debug!("scroll-spy: {} is now active", id);
                    on_active.emit(id);
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(spy.threshold()));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        let targets: Vec<Element> = registry.iter().map(|(_, el)| el.clone()).collect();
        for target in &targets {
            observer.observe(target);
        }
        log::debug!("scroll-spy observing {} sections", targets.len());

        Ok(Self {
            observer,
            targets,
            _callback: callback,
        })
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        for target in &self.targets {
            self.observer.unobserve(target);
        }
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_threshold_is_thirty_percent() {
        assert_eq!(ScrollSpy::default().threshold(), 0.3);
    }

    #[test]
    fn single_report_needs_the_threshold() {
        let spy = ScrollSpy::default();
        assert_eq!(spy.on_visibility_change("pricing", 0.29), None);
        assert_eq!(spy.on_visibility_change("pricing", 0.3), Some(SectionId::Pricing));
        assert_eq!(spy.on_visibility_change("pricing", 1.0), Some(SectionId::Pricing));
    }

    #[test]
    fn unknown_targets_are_ignored() {
        let spy = ScrollSpy::default();
        assert_eq!(spy.on_visibility_change("testimonials", 0.9), None);
        assert_eq!(spy.resolve_batch([("", 1.0), ("footer", 0.8)]), None);
    }

    #[test]
    fn most_visible_section_wins_a_batch() {
        let spy = ScrollSpy::default();
        let batch = [("features", 0.7), ("how", 0.35), ("home", 0.1)];
        assert_eq!(spy.resolve_batch(batch), Some(SectionId::Features));
    }

    #[test]
    fn equal_ratios_go_to_the_later_entry() {
        let spy = ScrollSpy::default();
        let batch = [("how", 0.5), ("pricing", 0.5)];
        assert_eq!(spy.resolve_batch(batch), Some(SectionId::Pricing));
    }

    #[test]
    fn empty_batch_changes_nothing() {
        let spy = ScrollSpy::default();
        assert_eq!(spy.resolve_batch(std::iter::empty()), None);
    }
}
