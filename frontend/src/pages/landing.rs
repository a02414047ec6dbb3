use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use yew::prelude::*;

use crate::components::config_modal::ConfigModal;
use crate::components::faq::Faq;
use crate::components::features::Features;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::how_it_works::HowItWorks;
use crate::components::pricing::Pricing;
use crate::components::testimonials::Testimonials;
use crate::navigation::{navigate_to, ScrollSpy, SectionId, SectionObserver, SectionRefs, SectionRegistry};
use crate::state::{LandingAction, LandingState};
use crate::utils::clipboard::{copy_configuration, BrowserClipboard};
use crate::utils::timer::{GenerationTimer, GlooScheduler};

/// Fragment of the current URL without the leading `#`, if any.
fn current_fragment() -> Option<String> {
    let hash = web_sys::window()?.location().hash().ok()?;
    let fragment = hash.trim_start_matches('#');
    (!fragment.is_empty()).then(|| fragment.to_string())
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let state = use_reducer(LandingState::default);
    let refs = SectionRefs {
        home: use_node_ref(),
        features: use_node_ref(),
        how: use_node_ref(),
        pricing: use_node_ref(),
        faq: use_node_ref(),
    };
    let registry = use_mut_ref(SectionRegistry::<Element>::new);
    // Dropped with the page, which cancels a pending confirmation reset.
    let copy_timer = use_mut_ref(|| GenerationTimer::new(GlooScheduler));

    let on_navigate = {
        let state = state.clone();
        let registry = registry.clone();
        Callback::from(move |id: SectionId| {
            if let Some(id) = navigate_to(&*registry.borrow(), id.as_str()) {
                state.dispatch(LandingAction::Navigated(id));
            }
        })
    };

    // Register the mounted sections, start the scroll-spy and follow a #section deep link.
    {
        let state = state.clone();
        let refs = refs.clone();
        let registry = registry.clone();
        use_effect_with_deps(
            move |_| {
                *registry.borrow_mut() = refs.to_registry();
                log::info!("landing page mounted with {} sections", registry.borrow().len());

                let on_active = {
                    let state = state.clone();
                    Callback::from(move |id: SectionId| state.dispatch(LandingAction::SectionVisible(id)))
                };
                let observer = match SectionObserver::observe(&registry.borrow(), ScrollSpy::default(), on_active) {
                    Ok(observer) => Some(observer),
                    Err(e) => {
                        log::warn!("scroll-spy unavailable: {:?}", e);
                        None
                    }
                };

                if let Some(fragment) = current_fragment() {
                    if let Some(id) = navigate_to(&*registry.borrow(), &fragment) {
                        state.dispatch(LandingAction::Navigated(id));
                    }
                }

                move || drop(observer)
            },
            (),
        );
    }

    let on_toggle_menu = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(LandingAction::ToggleMenu))
    };
    let on_open_config = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(LandingAction::OpenConfigModal))
    };
    let on_close_config = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(LandingAction::CloseConfigModal))
    };
    let on_copy = {
        let state = state.clone();
        let copy_timer = copy_timer.clone();
        Callback::from(move |_: ()| {
            let state = state.clone();
            let copy_timer = copy_timer.clone();
            spawn_local(async move {
                let dispatch = move |action: LandingAction| state.dispatch(action);
                // failures are logged and reflected in the modal already
                let _ = copy_configuration(&BrowserClipboard, &*copy_timer, dispatch).await;
            });
        })
    };

    html! {
        <div class="min-h-screen bg-gray-900 text-gray-100">
            <Header
                active={state.active_section}
                menu_open={state.menu_open}
                on_navigate={on_navigate.clone()}
                on_toggle_menu={on_toggle_menu}
                on_open_config={on_open_config.clone()}
            />
            <Hero section_ref={refs.home.clone()} on_open_config={on_open_config} />
            <Features section_ref={refs.features.clone()} />
            <HowItWorks section_ref={refs.how.clone()} />
            <Pricing section_ref={refs.pricing.clone()} />
            <Testimonials />
            <Faq section_ref={refs.faq.clone()} />
            <Footer on_navigate={on_navigate} />
            if state.modal_open {
                <ConfigModal
                    copy_confirmed={state.copy_confirmed}
                    copy_failed={state.copy_failed}
                    on_close={on_close_config}
                    on_copy={on_copy}
                />
            }
        </div>
    }
}
