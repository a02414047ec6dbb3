use yew::prelude::*;

use crate::content::TESTIMONIALS;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section class="py-16 px-4 container mx-auto">
            <h2 class="text-3xl md:text-4xl font-bold text-center mb-12">
                {"What Our "}<span class="text-indigo-500">{"Users"}</span>{" Say"}
            </h2>
            <div class="grid md:grid-cols-3 gap-8 max-w-6xl mx-auto">
                { for TESTIMONIALS.iter().map(|t| html! {
                    <div key={t.name} class="bg-gray-800 p-6 rounded-xl hover:bg-gray-700/50 transition-all duration-300 hover:shadow-xl">
                        <div class="mb-4 text-yellow-400">
                            { for (0..5).map(|_| html! { <i class="fas fa-star mr-1"></i> }) }
                        </div>
                        <p class="text-gray-300 mb-4 italic">{format!("\"{}\"", t.quote)}</p>
                        <div class="flex items-center">
                            <div class="w-10 h-10 rounded-full bg-indigo-600 flex items-center justify-center text-white font-bold mr-3">
                                {t.initials()}
                            </div>
                            <div>
                                <h4 class="font-semibold">{t.name}</h4>
                                <p class="text-sm text-gray-400">{t.role}</p>
                            </div>
                        </div>
                    </div>
                }) }
            </div>
        </section>
    }
}
