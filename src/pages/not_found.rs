use leptos::prelude::*;

/// 404 page.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="not-found">
			<h1>"Pagina nu a fost găsită"</h1>
			<a href="/">"Înapoi la ecosistem"</a>
		</div>
	}
}
