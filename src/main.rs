//! VAUM Studio site - Entry Point

fn main() -> Result<(), vaum_site::model::SiteError> {
    console_error_panic_hook::set_once();

    // A missing location only loses the query overrides.
    let search = vaum_site::dom::window()
        .ok()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default();

    vaum_site::start(&search)
}
