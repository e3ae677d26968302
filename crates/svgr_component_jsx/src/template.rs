use crate::{Config, ExpandProps, ExportType, JsxRuntime, State};

/// Wraps the rendered JSX in SVGR's default component template.
pub fn render_template(jsx: &str, config: &Config, state: &State) -> String {
  let typescript = config.typescript();
  let with_ref = config.with_ref();
  let mut lines = vec![];

  if config.jsx_runtime() == JsxRuntime::Classic {
    lines.push(r#"import * as React from "react";"#.to_string());
  }
  if typescript {
    lines.push(r#"import type { SVGProps } from "react";"#.to_string());
    if with_ref {
      lines.push(r#"import type { Ref } from "react";"#.to_string());
    }
  }
  if with_ref {
    lines.push(r#"import { forwardRef } from "react";"#.to_string());
  }
  if config.memo() {
    lines.push(r#"import { memo } from "react";"#.to_string());
  }

  let mut extra_props = vec![];
  if config.title_prop() {
    extra_props.extend(["title", "titleId"]);
  }
  if config.desc_prop() {
    extra_props.extend(["desc", "descId"]);
  }

  if typescript && !extra_props.is_empty() {
    lines.push("interface SVGRProps {".to_string());
    lines.extend(extra_props.iter().map(|prop| format!("  {prop}?: string;")));
    lines.push("}".to_string());
  }

  let spread_props = config.expand_props() != ExpandProps::Off;
  let mut props = if extra_props.is_empty() {
    if spread_props || with_ref {
      "props".to_string()
    } else {
      String::new()
    }
  } else if spread_props {
    format!("{{ {}, ...props }}", extra_props.join(", "))
  } else {
    format!("{{ {} }}", extra_props.join(", "))
  };
  if typescript && !props.is_empty() {
    props.push_str(": SVGProps<SVGSVGElement>");
    if !extra_props.is_empty() {
      props.push_str(" & SVGRProps");
    }
  }
  let mut params = vec![];
  if !props.is_empty() {
    params.push(props);
  }
  if with_ref {
    params.push(if typescript { "ref: Ref<SVGSVGElement>" } else { "ref" }.to_string());
  }

  let component_name = &state.component_name;
  lines.push(format!(
    "const {component_name} = ({}) => {jsx};",
    params.join(", ")
  ));

  let mut exported = component_name.to_string();
  if with_ref {
    lines.push(format!("const ForwardRef = forwardRef({exported});"));
    exported = "ForwardRef".to_string();
  }
  if config.memo() {
    lines.push(format!("const Memo = memo({exported});"));
    exported = "Memo".to_string();
  }
  lines.push(match config.export_type() {
    ExportType::Default => format!("export default {exported};"),
    ExportType::Named => format!("export {{ {exported} as {} }};", config.named_export()),
  });

  let mut code = lines.join("\n");
  code.push('\n');
  code
}
