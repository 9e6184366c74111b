use super::{Frame, MealList, RenderError, RenderSink, ViewState, NO_MEALS_FOUND, SOMETHING_WENT_WRONG};
use crate::model::{Category, MealDetail, MealSummary};
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use std::fmt::Write;

/// Renders frames as an HTML fragment.
///
/// Each render replaces the previously rendered markup. Every remote value
/// goes through `html-escape`: text nodes with `encode_text` and attribute
/// values with `encode_double_quoted_attribute`.
#[derive(Debug, Default)]
pub struct HtmlRenderer {
    html: String,
    renders: usize,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup of the most recent frame.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Number of frames rendered so far.
    pub fn renders(&self) -> usize {
        self.renders
    }
}

impl RenderSink for HtmlRenderer {
    fn render(&mut self, frame: &Frame) -> Result<(), RenderError> {
        let mut out = String::new();
        write_frame(&mut out, frame)?;
        self.html = out;
        self.renders += 1;
        Ok(())
    }
}

fn write_frame(out: &mut String, frame: &Frame) -> std::fmt::Result {
    if !frame.menu.is_empty() {
        out.push_str("<nav id=\"menu\"><ul>");
        for name in &frame.menu {
            write!(
                out,
                "<li><a href=\"#\" data-category=\"{}\">{}</a></li>",
                attr(name),
                text(name)
            )?;
        }
        out.push_str("</ul></nav>\n");
    }

    out.push_str("<main>\n");
    write!(
        out,
        "<form class=\"search\"><input id=\"search\" type=\"text\" value=\"{}\"></form>\n",
        attr(&frame.search_text)
    )?;
    write!(out, "<h3>{}</h3>\n", text(&frame.heading))?;

    if let Some(category) = &frame.description {
        write!(
            out,
            "<div class=\"category-description show\"><h3>{}</h3><p>{}</p></div>\n",
            text(&category.name),
            text(&category.description)
        )?;
    }

    match &frame.view {
        ViewState::Idle => {}
        ViewState::Catalog(categories) => write_catalog(out, categories)?,
        ViewState::List(MealList::Meals(meals)) => write_meals(out, meals)?,
        ViewState::List(MealList::NoneFound) => {
            write!(
                out,
                "<div class=\"results\"><h2 style=\"color:red;\">{NO_MEALS_FOUND}</h2></div>\n"
            )?;
        }
        ViewState::Detail(meal) => write_detail(out, meal)?,
        ViewState::Unavailable => {
            write!(
                out,
                "<div class=\"results\"><h2 class=\"error\">{SOMETHING_WENT_WRONG}</h2></div>\n"
            )?;
        }
    }

    out.push_str("</main>\n");
    Ok(())
}

fn write_catalog(out: &mut String, categories: &[Category]) -> std::fmt::Result {
    out.push_str("<div class=\"results\">");
    for category in categories {
        write!(
            out,
            "<div class=\"meal-card\" data-category=\"{}\"><h4>{}</h4><img src=\"{}\" alt=\"{}\"></div>",
            attr(&category.name),
            text(&category.name),
            attr(&category.thumbnail_url),
            attr(&category.name)
        )?;
    }
    out.push_str("</div>\n");
    Ok(())
}

fn write_meals(out: &mut String, meals: &[MealSummary]) -> std::fmt::Result {
    out.push_str("<div class=\"results\">");
    for meal in meals {
        write!(
            out,
            "<div class=\"meal-card\" data-meal-id=\"{}\"><h4>{}</h4><img src=\"{}\" alt=\"{}\"></div>",
            attr(&meal.id),
            text(&meal.name),
            attr(&meal.thumbnail_url),
            attr(&meal.name)
        )?;
    }
    out.push_str("</div>\n");
    Ok(())
}

fn write_detail(out: &mut String, meal: &MealDetail) -> std::fmt::Result {
    out.push_str("<div class=\"meal-details\">\n<div class=\"meal-top\">");
    write!(
        out,
        "<div class=\"meal-image\"><img src=\"{}\" alt=\"{}\"></div>",
        attr(&meal.thumbnail_url),
        attr(&meal.name)
    )?;
    out.push_str("<div class=\"meal-info-box\"><div class=\"meal-info\">");
    write!(out, "<h2>{}</h2>", text(&meal.name))?;
    write!(
        out,
        "<p><strong>Category &gt;&gt;</strong> {}</p>",
        text(&meal.category)
    )?;
    if let Some(url) = &meal.source_url {
        write!(
            out,
            "<p><strong>Source:</strong> <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></p>",
            attr(url),
            text(url)
        )?;
    }
    out.push_str("</div><div class=\"meal-ingredients-box\"><h4>Ingredients &amp; Measures</h4><ul>");
    for item in &meal.ingredients {
        if item.measure.is_empty() {
            write!(out, "<li>{}</li>", text(&item.ingredient))?;
        } else {
            write!(
                out,
                "<li>{} {}</li>",
                text(&item.measure),
                text(&item.ingredient)
            )?;
        }
    }
    out.push_str("</ul></div></div></div>\n<div class=\"meal-bottom\"><h4>Instructions</h4><ol>");
    for step in &meal.instruction_steps {
        write!(out, "<li>{}</li>", text(step))?;
    }
    out.push_str("</ol></div>\n</div>\n");
    Ok(())
}
