use yew::prelude::*;

use crate::components::CommunityEvents;

#[function_component]
pub fn HomePage() -> Html {
    html! {
        <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <CommunityEvents />
        </main>
    }
}
