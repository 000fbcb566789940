use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct OverlayProps {
    #[prop_or_default]
    pub children: Html,
}

/// Mounts its children onto `document.body` instead of in place, so the
/// proposal overlay covers the whole page regardless of where the widget sits.
#[function_component]
pub(crate) fn Overlay(props: &OverlayProps) -> Html {
    let overlay_host = gloo::utils::body();
    create_portal(props.children.clone(), overlay_host.into())
}

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes(core::array::from_fn(|_| (256. * random()) as u8))
}
