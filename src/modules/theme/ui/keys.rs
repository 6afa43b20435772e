/// Translation keys the theme pages render, besides the keys carried by
/// the catalog data itself.
pub const REQUIRED_KEYS: &[&str] = &[
    "common:nav.home",
    "common:nav.about",
    "common:nav.skills",
    "common:nav.experience",
    "common:nav.portfolio",
    "common:nav.contact",
    "common:locale.label",
    "common:footer.copy",
    "common:footer.all_themes",
    "common:home.greeting",
    "common:home.cta",
    "common:home.featured",
    "common:skills.categories.design",
    "common:skills.categories.tools",
    "common:skills.categories.soft",
    "common:experience.work",
    "common:experience.education",
    "common:experience.current",
    "common:experience.grade",
    "common:portfolio.client",
    "common:portfolio.year",
    "common:portfolio.categories",
    "common:portfolio.back",
    "common:contact.intro",
    "common:contact.email",
    "common:not_found.title",
    "common:not_found.message",
    "common:not_found.back",
    "common:fallback.title",
    "common:fallback.message",
    "common:fallback.retry",
    "profile:about.intro",
    "profile:about.story",
    "projects:intro",
];
