//! Built-in component templates.
//! Produces the contents of the component, style, index, test and story files
//! without touching the filesystem.

use cruet::Inflector;
use indexmap::IndexSet;
use log::debug;
use serde::Deserialize;
use serde_json::json;

use crate::error::Result;
use crate::renderer::{MiniJinjaRenderer, TemplateRenderer};

/// Kind of component body to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    #[default]
    Functional,
    Class,
    Pure,
}

impl ComponentType {
    fn base_class(self) -> Option<&'static str> {
        match self {
            ComponentType::Functional => None,
            ComponentType::Class => Some("Component"),
            ComponentType::Pure => Some("PureComponent"),
        }
    }
}

const FUNCTIONAL: &str = r#"import React from 'react';
{% if style_file %}
import './{{ style_file }}';
{% endif %}

const {{ name }} = () => (
  <div className="{{ class_name }}">
    {{ name }}
  </div>
);

export default {{ name }};
"#;

const CLASS: &str = r#"import React, { {{ base }} } from 'react';
{% if style_file %}
import './{{ style_file }}';
{% endif %}

class {{ name }} extends {{ base }} {
{% for method in methods %}
  {{ method }}() {
  }

{% endfor %}
  render() {
    return (
      <div className="{{ class_name }}">
        {{ name }}
      </div>
    );
  }
}

export default {{ name }};
"#;

const STYLE: &str = r#".{{ class_name }} {
}
"#;

const INDEX: &str = r#"export { default } from './{{ component_file }}';
"#;

const CONNECTED_INDEX: &str = r#"import { connect } from 'react-redux';
import {{ name }} from './{{ component_file }}';

const mapStateToProps = state => ({});

const mapDispatchToProps = dispatch => ({});

export default connect(mapStateToProps, mapDispatchToProps)({{ name }});
"#;

const TEST: &str = r#"import React from 'react';
import { shallow } from 'enzyme';
import {{ name }} from './{{ component_file }}';

describe('{{ name }}', () => {
  it('renders without crashing', () => {
    shallow(<{{ name }} />);
  });
});
"#;

const STORY: &str = r#"import React from 'react';
import { storiesOf } from '@storybook/react';
import {{ name }} from './{{ component_file }}';

storiesOf('{{ name }}', module).add('default', () => <{{ name }} />);
"#;

const TEMPLATES: [(&str, &str); 7] = [
    ("functional", FUNCTIONAL),
    ("class", CLASS),
    ("style", STYLE),
    ("index", INDEX),
    ("connected_index", CONNECTED_INDEX),
    ("test", TEST),
    ("story", STORY),
];

/// Generates file contents from the embedded templates.
pub struct TemplateGenerator {
    renderer: Box<dyn TemplateRenderer>,
}

impl TemplateGenerator {
    /// Creates a generator backed by the embedded MiniJinja templates.
    pub fn new() -> Result<Self> {
        Ok(Self::with_renderer(Box::new(MiniJinjaRenderer::with_templates(&TEMPLATES)?)))
    }

    /// Creates a generator backed by another renderer. The renderer must know
    /// the template names `functional`, `class`, `style`, `index`,
    /// `connected_index`, `test` and `story`.
    pub fn with_renderer(renderer: Box<dyn TemplateRenderer>) -> Self {
        Self { renderer }
    }

    /// Renders the component body.
    ///
    /// # Arguments
    /// * `kind` - Functional or class-style component
    /// * `name` - Component name
    /// * `style_file` - Style file to import, with extension
    /// * `methods` - Method stubs for class-style components
    pub fn component(
        &self,
        kind: ComponentType,
        name: &str,
        style_file: Option<&str>,
        methods: &[String],
    ) -> Result<String> {
        let Some(base) = kind.base_class() else {
            if !methods.is_empty() {
                debug!("Functional component {name}: ignoring {} method(s)", methods.len());
            }
            let context = json!({
                "name": name,
                "class_name": name.to_kebab_case(),
                "style_file": style_file,
            });
            return self.renderer.render("functional", &context);
        };

        let methods: IndexSet<&str> = methods
            .iter()
            .map(String::as_str)
            .filter(|method| !method.is_empty() && *method != "render")
            .collect();

        let context = json!({
            "name": name,
            "base": base,
            "class_name": name.to_kebab_case(),
            "style_file": style_file,
            "methods": methods.into_iter().collect::<Vec<_>>(),
        });
        self.renderer.render("class", &context)
    }

    pub fn style(&self, name: &str) -> Result<String> {
        self.renderer.render("style", &json!({ "class_name": name.to_kebab_case() }))
    }

    /// Renders the index file re-exporting the component, wrapped with
    /// `connect` when `connected` is set.
    pub fn index(&self, name: &str, component_file: &str, connected: bool) -> Result<String> {
        let template = if connected { "connected_index" } else { "index" };
        self.renderer.render(template, &json!({ "name": name, "component_file": component_file }))
    }

    pub fn test(&self, name: &str, component_file: &str) -> Result<String> {
        self.renderer.render("test", &json!({ "name": name, "component_file": component_file }))
    }

    pub fn story(&self, name: &str, component_file: &str) -> Result<String> {
        self.renderer.render("story", &json!({ "name": name, "component_file": component_file }))
    }
}
