use yew::prelude::*;

use crate::utils::profile::{ConnectionProfile, SAMPLE_PROFILE};

const MODAL_CSS: &str = r#"
    @keyframes config-modal-fade-in {
        from { opacity: 0; transform: translateY(12px) scale(0.98); }
        to { opacity: 1; transform: translateY(0) scale(1); }
    }
    .config-modal {
        animation: config-modal-fade-in 0.2s ease-out;
    }
    .config-modal pre {
        max-height: 50vh;
    }
"#;

#[derive(Properties, PartialEq)]
pub struct ConfigModalProps {
    pub copy_confirmed: bool,
    pub copy_failed: bool,
    pub on_close: Callback<()>,
    pub on_copy: Callback<()>,
}

#[function_component(ConfigModal)]
pub fn config_modal(props: &ConfigModalProps) -> Html {
    let on_close = props.on_close.reform(|_: MouseEvent| ());
    let on_copy = props.on_copy.reform(|_: MouseEvent| ());
    let summary = ConnectionProfile::sample().map(|profile| profile.summary());

    let copy_label = if props.copy_confirmed {
        "Copied!"
    } else {
        "Copy Configuration"
    };

    html! {
        <div class="fixed inset-0 bg-black/70 flex items-center justify-center z-50 p-4" role="dialog" aria-modal="true">
            <style>{MODAL_CSS}</style>
            <div class="config-modal bg-gray-800 rounded-xl max-w-lg w-full p-6 relative">
                <button
                    class="absolute top-4 right-4 text-gray-400 hover:text-white"
                    aria-label="Close"
                    onclick={on_close}
                >
                    <svg xmlns="http://www.w3.org/2000/svg" class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                    </svg>
                </button>
                <h2 class="text-2xl font-bold mb-4">{"VLESS Configuration"}</h2>
                <p class="text-gray-400 mb-4">{"Copy the configuration below to use with your VLESS client:"}</p>
                if let Some(summary) = summary {
                    <p class="text-sm text-indigo-300 mb-2">{summary}</p>
                }
                <pre class="bg-gray-900 p-4 rounded-lg overflow-x-auto mb-4 text-sm">{SAMPLE_PROFILE}</pre>
                <button
                    class="w-full bg-gradient-to-r from-indigo-500 to-purple-600 hover:from-indigo-600 hover:to-purple-700 text-white py-2 rounded-lg transition-colors"
                    onclick={on_copy}
                >
                    {copy_label}
                </button>
                if props.copy_failed {
                    <p class="mt-3 text-sm text-red-400" role="alert">
                        {"Couldn't access the clipboard. Select the text above and copy it manually."}
                    </p>
                }
            </div>
        </div>
    }
}
