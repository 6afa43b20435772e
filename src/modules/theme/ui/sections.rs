use chrono::NaiveDate;

use crate::{
    portfolio::application::domain::entities::{DateRange, Project, RangeEnd, TimelineEntry},
    shared::ui::{escape, ThemeLink},
    theme::application::domain::{Layout, ThemePage},
};

use super::PageContext;

/// One titled chunk of page content. Layouts decide how blocks are framed.
pub(super) struct Block {
    pub title: String,
    pub body: String,
}

impl Block {
    fn new(title: String, body: String) -> Self {
        Self { title, body }
    }
}

/// Content blocks for `page`, or `None` when the page has nothing to show.
pub(super) fn blocks_for(ctx: &PageContext<'_>, page: &ThemePage) -> Option<Vec<Block>> {
    match page {
        ThemePage::Home => Some(home(ctx)),
        ThemePage::About => Some(about(ctx)),
        ThemePage::Skills => Some(skills(ctx)),
        ThemePage::Experience => Some(experience(ctx)),
        ThemePage::Portfolio => Some(portfolio(ctx)),
        ThemePage::Project(slug) => project(ctx, slug),
        ThemePage::Contact => Some(contact(ctx)),
        ThemePage::Stylesheet | ThemePage::NotFound => None,
    }
}

pub(super) fn not_found(ctx: &PageContext<'_>) -> Vec<Block> {
    let back = ThemeLink::new(ctx.base, "", &ctx.t.t("common:not_found.back")).class("button");
    vec![Block::new(
        ctx.t.t("common:not_found.title"),
        format!(
            "<p>{}</p><p>{}</p>",
            escape(&ctx.t.t("common:not_found.message")),
            back.render()
        ),
    )]
}

/// Frames blocks the way the theme's layout arranges content.
pub(super) fn arrange(layout: Layout, blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(|block| {
            let title = escape(&block.title);
            match layout {
                Layout::Grid => format!(
                    "<article class=\"card\"><h2>{title}</h2>{}</article>",
                    block.body
                ),
                Layout::Console => format!(
                    "<section class=\"block\"><h2><span class=\"prompt\">$</span> {title}</h2>{}</section>",
                    block.body
                ),
                Layout::Split => format!(
                    "<section class=\"block\"><h2 class=\"kicker\">{title}</h2><div class=\"body\">{}</div></section>",
                    block.body
                ),
                Layout::Stacked | Layout::Sidebar => format!(
                    "<section class=\"block\"><h2>{title}</h2>{}</section>",
                    block.body
                ),
            }
        })
        .collect()
}

fn roles(ctx: &PageContext<'_>) -> Vec<String> {
    ctx.catalog
        .profile()
        .role_keys
        .iter()
        .map(|key| ctx.t.t(key))
        .collect()
}

fn home(ctx: &PageContext<'_>) -> Vec<Block> {
    let profile = ctx.catalog.profile();
    let greeting = ctx
        .t
        .t_with("common:home.greeting", &[("name", profile.name.as_str())]);
    let cta = ThemeLink::new(ctx.base, &ThemePage::Portfolio.path(), &ctx.t.t("common:home.cta"))
        .class("button");

    let hero = format!(
        "<p class=\"roles\">{}</p><p class=\"lead\">{}</p><p>{}</p>",
        escape(&roles(ctx).join(" · ")),
        escape(&greeting),
        cta.render()
    );

    let featured: String = ctx
        .catalog
        .projects()
        .iter()
        .take(3)
        .map(|project| project_teaser(ctx, project))
        .collect();

    vec![
        Block::new(profile.name.clone(), hero),
        Block::new(
            ctx.t.t("common:home.featured"),
            format!("<ul class=\"projects\">{featured}</ul>"),
        ),
    ]
}

fn about(ctx: &PageContext<'_>) -> Vec<Block> {
    let roles: String = roles(ctx)
        .iter()
        .map(|role| format!("<li>{}</li>", escape(role)))
        .collect();
    vec![Block::new(
        ctx.t.t("common:nav.about"),
        format!(
            "<p class=\"lead\">{}</p><p>{}</p><ul class=\"roles\">{roles}</ul>",
            escape(&ctx.t.t("profile:about.intro")),
            escape(&ctx.t.t("profile:about.story")),
        ),
    )]
}

fn skills(ctx: &PageContext<'_>) -> Vec<Block> {
    ctx.catalog
        .skill_groups()
        .into_iter()
        .map(|group| {
            let items: String = group
                .skills
                .iter()
                .map(|skill| format!("<li>{}</li>", escape(&skill.name)))
                .collect();
            Block::new(
                ctx.t.t(group.category.label_key()),
                format!(
                    "<ul class=\"skills\" data-skill-group=\"{}\">{items}</ul>",
                    group.category.as_str()
                ),
            )
        })
        .collect()
}

fn month(date: NaiveDate) -> String {
    date.format("%m/%Y").to_string()
}

fn format_range(ctx: &PageContext<'_>, range: &DateRange) -> String {
    let end = match &range.end {
        RangeEnd::Current => ctx.t.t("common:experience.current"),
        RangeEnd::Date(date) => month(*date),
    };
    format!("{} – {}", month(range.start), end)
}

fn timeline_list(ctx: &PageContext<'_>, entries: &[TimelineEntry]) -> String {
    let items: String = entries
        .iter()
        .map(|entry| {
            let grade = entry
                .grade
                .as_deref()
                .map(|grade| {
                    format!(
                        "<p class=\"grade\">{}: {}</p>",
                        escape(&ctx.t.t("common:experience.grade")),
                        escape(grade)
                    )
                })
                .unwrap_or_default();
            format!(
                "<li class=\"entry{}\"><p class=\"dates\">{}</p><h3>{}</h3><p class=\"institution\">{}</p>{grade}</li>",
                if entry.range.is_current() { " current" } else { "" },
                escape(&format_range(ctx, &entry.range)),
                escape(&ctx.t.t(&entry.title_key)),
                escape(&entry.institution),
            )
        })
        .collect();
    format!("<ol class=\"timeline\">{items}</ol>")
}

fn experience(ctx: &PageContext<'_>) -> Vec<Block> {
    vec![
        Block::new(
            ctx.t.t("common:experience.work"),
            timeline_list(ctx, ctx.catalog.experience()),
        ),
        Block::new(
            ctx.t.t("common:experience.education"),
            timeline_list(ctx, ctx.catalog.education()),
        ),
    ]
}

fn project_teaser(ctx: &PageContext<'_>, project: &Project) -> String {
    let link = ThemeLink::new(
        ctx.base,
        &ThemePage::Project(project.slug.clone()).path(),
        &project.title,
    );
    format!(
        "<li data-project=\"{}\" style=\"--project-color: {}\">{}<span class=\"meta\">{} · {}</span></li>",
        escape(&project.slug),
        escape(&project.color),
        link.render(),
        project.year,
        escape(&project.categories.join(", ")),
    )
}

fn portfolio(ctx: &PageContext<'_>) -> Vec<Block> {
    let items: String = ctx
        .catalog
        .projects()
        .iter()
        .map(|project| project_teaser(ctx, project))
        .collect();
    vec![Block::new(
        ctx.t.t("common:nav.portfolio"),
        format!(
            "<p class=\"lead\">{}</p><ul class=\"projects\">{items}</ul>",
            escape(&ctx.t.t("projects:intro"))
        ),
    )]
}

fn project(ctx: &PageContext<'_>, slug: &str) -> Option<Vec<Block>> {
    let project = ctx.catalog.project_by_slug(slug)?;

    let mut facts = format!(
        "<dt>{}</dt><dd>{}</dd><dt>{}</dt><dd>{}</dd>",
        escape(&ctx.t.t("common:portfolio.year")),
        project.year,
        escape(&ctx.t.t("common:portfolio.categories")),
        escape(&project.categories.join(", ")),
    );
    if let Some(client) = &project.client {
        facts.push_str(&format!(
            "<dt>{}</dt><dd>{}</dd>",
            escape(&ctx.t.t("common:portfolio.client")),
            escape(client)
        ));
    }

    let back_label = ctx.t.t("common:portfolio.back");
    let back = ThemeLink::new(ctx.base, &ThemePage::Portfolio.path(), &back_label).class("button");

    Some(vec![Block::new(
        project.title.clone(),
        format!(
            "<article class=\"project\" data-project=\"{}\" style=\"--project-color: {}\"><p class=\"lead\">{}</p><dl>{facts}</dl><p>{}</p></article>",
            escape(&project.slug),
            escape(&project.color),
            escape(&ctx.t.t(&project.summary_key)),
            back.render(),
        ),
    )])
}

fn contact(ctx: &PageContext<'_>) -> Vec<Block> {
    let profile = ctx.catalog.profile();
    let links: String = profile
        .contacts
        .iter()
        .map(|link| {
            format!(
                "<li><a href=\"{}\" rel=\"me noopener\" data-platform=\"{}\">{}</a></li>",
                escape(&link.url),
                escape(&link.platform),
                escape(&link.label)
            )
        })
        .collect();

    vec![Block::new(
        ctx.t.t("common:nav.contact"),
        format!(
            "<p class=\"lead\">{}</p><p><a class=\"button\" href=\"mailto:{}\">{}</a></p><ul class=\"contacts\">{links}</ul>",
            escape(&ctx.t.t("common:contact.intro")),
            escape(&profile.email),
            escape(&ctx.t.t("common:contact.email")),
        ),
    )]
}
