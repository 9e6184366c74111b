use super::{Frame, MealList, RenderError, RenderSink, ViewState, NO_MEALS_FOUND, SOMETHING_WENT_WRONG};
use crate::model::MealDetail;
use std::io::Write;

/// Renders frames as plain text for a terminal.
///
/// Control characters in remote text are dropped so API data cannot move
/// the cursor or inject escape sequences.
#[derive(Debug)]
pub struct TextRenderer<W> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        TextRenderer { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> RenderSink for TextRenderer<W> {
    fn render(&mut self, frame: &Frame) -> Result<(), RenderError> {
        let out = &mut self.out;

        if !frame.heading.is_empty() {
            writeln!(out, "== {} ==", clean(&frame.heading))?;
        }
        if let Some(category) = &frame.description {
            writeln!(out, "{}", clean(&category.name))?;
            writeln!(out, "{}", clean(&category.description))?;
            writeln!(out)?;
        }

        match &frame.view {
            ViewState::Idle => {}
            ViewState::Catalog(categories) => {
                for category in categories {
                    writeln!(out, "- {}", clean(&category.name))?;
                }
            }
            ViewState::List(MealList::Meals(meals)) => {
                for meal in meals {
                    writeln!(out, "- [{}] {}", clean(&meal.id), clean(&meal.name))?;
                }
            }
            ViewState::List(MealList::NoneFound) => writeln!(out, "{NO_MEALS_FOUND}")?,
            ViewState::Detail(meal) => write_detail(out, meal)?,
            ViewState::Unavailable => writeln!(out, "{SOMETHING_WENT_WRONG}")?,
        }

        out.flush()?;
        Ok(())
    }
}

fn write_detail<W: Write>(out: &mut W, meal: &MealDetail) -> std::io::Result<()> {
    writeln!(out, "{}", clean(&meal.name))?;
    writeln!(out, "Category >> {}", clean(&meal.category))?;
    if let Some(url) = &meal.source_url {
        writeln!(out, "Source: {}", clean(url))?;
    }

    writeln!(out)?;
    writeln!(out, "Ingredients & Measures")?;
    for item in &meal.ingredients {
        if item.measure.is_empty() {
            writeln!(out, "  - {}", clean(&item.ingredient))?;
        } else {
            writeln!(out, "  - {} {}", clean(&item.measure), clean(&item.ingredient))?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Instructions")?;
    for (n, step) in meal.instruction_steps.iter().enumerate() {
        writeln!(out, "  {}. {}", n + 1, clean(step))?;
    }
    Ok(())
}

fn clean(s: &str) -> String {
    s.chars().filter(|c| !c.is_control()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Ingredient, MealSummary};
    use indoc::indoc;

    fn render(frame: &Frame) -> String {
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.render(frame).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_meal_list() {
        let output = render(&Frame {
            heading: "Category >> Seafood".to_string(),
            description: Some(Category::new("Seafood", "Fish and shellfish.", "")),
            view: ViewState::List(MealList::Meals(vec![MealSummary {
                id: "52959".to_string(),
                name: "Baked salmon".to_string(),
                thumbnail_url: String::new(),
            }])),
            ..Frame::default()
        });

        assert_eq!(
            output,
            indoc! {"
                == Category >> Seafood ==
                Seafood
                Fish and shellfish.

                - [52959] Baked salmon
            "}
        );
    }

    #[test]
    fn test_none_found_and_unavailable() {
        let output = render(&Frame {
            view: ViewState::List(MealList::NoneFound),
            ..Frame::default()
        });
        assert_eq!(output, "No meals found\n");

        let output = render(&Frame {
            heading: SOMETHING_WENT_WRONG.to_string(),
            view: ViewState::Unavailable,
            ..Frame::default()
        });
        assert_eq!(output, "== Something went wrong ==\nSomething went wrong\n");
    }

    #[test]
    fn test_detail() {
        let output = render(&Frame {
            heading: "Toast".to_string(),
            view: ViewState::Detail(MealDetail {
                id: "1".to_string(),
                name: "Toast".to_string(),
                category: "Breakfast".to_string(),
                thumbnail_url: String::new(),
                source_url: None,
                ingredients: vec![
                    Ingredient {
                        measure: "2 slices".to_string(),
                        ingredient: "Bread".to_string(),
                    },
                    Ingredient {
                        measure: String::new(),
                        ingredient: "Butter".to_string(),
                    },
                ],
                instruction_steps: vec!["Toast bread.".to_string(), "Butter it.".to_string()],
            }),
            ..Frame::default()
        });

        assert_eq!(
            output,
            indoc! {"
                == Toast ==
                Toast
                Category >> Breakfast

                Ingredients & Measures
                  - 2 slices Bread
                  - Butter

                Instructions
                  1. Toast bread.
                  2. Butter it.
            "}
        );
    }

    #[test]
    fn test_control_characters_dropped() {
        let output = render(&Frame {
            heading: "Evil\u{1b}[2J name".to_string(),
            ..Frame::default()
        });
        assert_eq!(output, "== Evil[2J name ==\n");
    }
}
