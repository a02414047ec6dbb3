use yew::prelude::*;

use crate::content::FAQS;
use crate::navigation::SectionId;

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub section_ref: NodeRef,
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    html! {
        <section
            ref={props.section_ref.clone()}
            id={SectionId::Faq.as_str()}
            class="py-16 px-4 bg-gray-800/30"
        >
            <div class="container mx-auto max-w-3xl">
                <h2 class="text-3xl md:text-4xl font-bold text-center mb-12">
                    {"Frequently Asked "}<span class="text-indigo-500">{"Questions"}</span>
                </h2>
                <div class="space-y-4">
                    { for FAQS.iter().map(|entry| html! {
                        <div key={entry.question} class="bg-gray-800 rounded-lg overflow-hidden">
                            <details class="group">
                                <summary class="flex justify-between items-center p-6 cursor-pointer list-none">
                                    <h3 class="text-lg font-medium">{entry.question}</h3>
                                    <span class="transition-transform group-open:rotate-180">
                                        <i class="fas fa-chevron-down"></i>
                                    </span>
                                </summary>
                                <div class="px-6 pb-6 text-gray-400">{entry.answer}</div>
                            </details>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
