use desktop_runtime::{DesktopProvider, DesktopShell, MobileNavigator};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Desktop" />
        <Meta name="description" content="A simulated desktop running in the browser." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                    <Route path="/mobile" view=MobileEntry />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider>
            <DesktopShell />
        </DesktopProvider>
    }
}

#[component]
pub fn MobileEntry() -> impl IntoView {
    view! {
        <DesktopProvider>
            <MobileNavigator />
        </DesktopProvider>
    }
}
