use widget_framework::{AttributeError, Component, Html};

const DEFAULT_NAME: &str = "F#";

/// Greets whoever is named in its `name` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleGreeting {
    name: String,
}

impl Default for SampleGreeting {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
        }
    }
}

impl SampleGreeting {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Component for SampleGreeting {
    const TAG: &'static str = "spicy-sample";

    fn observed_attributes() -> &'static [&'static str] {
        &["name"]
    }

    fn attribute_changed(&mut self, name: &str, value: Option<&str>) -> Result<(), AttributeError> {
        match name {
            "name" => {
                self.name = value.unwrap_or(DEFAULT_NAME).to_string();
                Ok(())
            }
            _ => Err(AttributeError::Unobserved {
                tag: Self::TAG,
                name: name.to_string(),
            }),
        }
    }

    fn reflected_attributes(&self) -> Vec<(&'static str, String)> {
        vec![("name", self.name.clone())]
    }

    fn render(&self) -> Html {
        let mut html = Html::raw("<div>Hello ");
        html.push_text(&self.name).push_raw("!</div>");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_greeting() {
        assert_eq!(SampleGreeting::default().render().as_str(), "<div>Hello F#!</div>");
    }

    #[test]
    fn test_name_attribute() {
        let mut sample = SampleGreeting::default();
        sample.attribute_changed("name", Some("Rust")).unwrap();
        assert_eq!(sample.render().as_str(), "<div>Hello Rust!</div>");
        assert_eq!(sample.reflected_attributes(), vec![("name", "Rust".to_string())]);

        sample.attribute_changed("name", None).unwrap();
        assert_eq!(sample.name(), "F#");
        assert!(sample.attribute_changed("color", Some("red")).is_err());
    }
}
