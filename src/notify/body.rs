//! Plain-text message body rendering.

use handlebars::Handlebars;
use serde::Serialize;

use super::NotifyError;
use crate::network::AddressSet;

/// Values available to a body template besides the addresses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BodyContext {
    /// The probed interface name.
    pub interface: String,
    /// The local hostname.
    pub hostname: String,
}

/// Renders the notification body for an [`AddressSet`].
///
/// Without a template the body is the address literals, one per line.
/// With a Handlebars template the following variables are available:
/// - `addresses`: array of address literals (sorted)
/// - `interface`: probed interface name
/// - `hostname`: local hostname
///
/// Output is plain text, so HTML escaping is disabled.
///
/// # Example
///
/// ```
/// use ipnotify::network::AddressSet;
/// use ipnotify::notify::{BodyContext, BodyRenderer};
///
/// let renderer = BodyRenderer::new(Some("{{hostname}}: {{#each addresses}}{{this}} {{/each}}"));
/// let context = BodyContext { interface: "wlan0".into(), hostname: "pi".into() };
/// let addresses: AddressSet = ["203.0.113.7"].into_iter().collect();
///
/// assert_eq!(renderer.render(&addresses, &context).unwrap(), "pi: 203.0.113.7 ");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BodyRenderer {
    template: Option<String>,
}

#[derive(Serialize)]
struct TemplateData<'a> {
    addresses: Vec<&'a str>,
    interface: &'a str,
    hostname: &'a str,
}

impl BodyRenderer {
    /// Creates a renderer with an optional Handlebars template.
    #[must_use]
    pub fn new(template: Option<impl Into<String>>) -> Self {
        Self {
            template: template.map(Into::into),
        }
    }

    /// Checks that `template` compiles.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::Template`] describing the syntax error.
    pub fn validate(template: &str) -> Result<(), NotifyError> {
        Handlebars::new()
            .register_template_string("body", template)
            .map_err(|e| NotifyError::Template(e.to_string()))
    }

    /// Renders the body.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::Template`] if rendering fails.
    pub fn render(
        &self,
        addresses: &AddressSet,
        context: &BodyContext,
    ) -> Result<String, NotifyError> {
        let Some(template) = &self.template else {
            return Ok(addresses.iter().collect::<Vec<_>>().join("\n"));
        };

        let data = TemplateData {
            addresses: addresses.iter().collect(),
            interface: &context.interface,
            hostname: &context.hostname,
        };

        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars
            .render_template(template, &data)
            .map_err(|e| NotifyError::Template(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> BodyContext {
        BodyContext {
            interface: "wlan0".to_string(),
            hostname: "homeserver".to_string(),
        }
    }

    fn addresses() -> AddressSet {
        ["2001:db8::5", "203.0.113.7"].into_iter().collect()
    }

    #[test]
    fn default_body_lists_one_address_per_line() {
        let body = BodyRenderer::default().render(&addresses(), &context()).unwrap();
        assert_eq!(body, "2001:db8::5\n203.0.113.7");
    }

    #[test]
    fn default_body_of_empty_set_is_empty() {
        let body = BodyRenderer::default()
            .render(&AddressSet::new(), &context())
            .unwrap();
        assert!(body.is_empty());
    }

    #[test]
    fn template_sees_all_variables() {
        let renderer = BodyRenderer::new(Some(
            "{{hostname}}/{{interface}}:{{#each addresses}} {{this}}{{/each}}",
        ));

        let body = renderer.render(&addresses(), &context()).unwrap();

        assert_eq!(body, "homeserver/wlan0: 2001:db8::5 203.0.113.7");
    }

    #[test]
    fn template_output_is_not_html_escaped() {
        let renderer = BodyRenderer::new(Some("<{{hostname}}> & {{interface}}"));
        let context = BodyContext {
            interface: "a&b".to_string(),
            hostname: "h".to_string(),
        };

        let body = renderer.render(&addresses(), &context).unwrap();

        assert_eq!(body, "<h> & a&b");
    }

    #[test]
    fn validate_accepts_good_template() {
        assert!(BodyRenderer::validate("{{#each addresses}}{{this}}{{/each}}").is_ok());
    }

    #[test]
    fn validate_rejects_unclosed_block() {
        let result = BodyRenderer::validate("{{#each addresses}}");
        assert!(matches!(result, Err(NotifyError::Template(_))));
    }
}
