pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub active: bool,
}

pub fn site_nav(current: &str) -> Vec<NavItem> {
    [
        ("Club", "/club"),
        ("Next match", "/matches/next"),
        ("Lineup", "/lineup"),
    ]
    .into_iter()
    .map(|(label, href)| NavItem {
        label,
        href,
        active: href == current,
    })
    .collect()
}
