use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::home::Home;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/assist-web.css"/>
        <Title text="IDMC Assist - AI answers about Informatica IDMC"/>
        <Meta name="description" content="Ask questions about Informatica Intelligent Data Management Cloud and get AI-generated answers"/>

        <Router>
            <main>
                <Routes fallback=|| "Page not found.">
                    <Route path=path!("/") view=Home/>
                </Routes>
            </main>
        </Router>
    }
}
