//! XMI 2.1 rendering of a UML model.
//!
//! The document is produced in three parts: a header opening the
//! `uml:Model` root, one `packagedElement` block per class, and a footer
//! closing the root. Concatenated in that order they form a single-rooted
//! document.

use std::io::{self, Write};

use pg2xmi_core::{Attribute, Class, Model};

const XMI_VERSION: &str = "2.1";
const XMI_NAMESPACE: &str = "http://schema.omg.org/spec/XMI/2.1";
const UML_NAMESPACE: &str = "http://www.eclipse.org/uml2/3.0.0/UML";

/// Render the whole model as an XMI document.
pub fn export_xmi(model: &Model) -> String {
    let mut out = write_header(model);
    for class in &model.classes {
        out.push_str(&write_class(class));
    }
    out.push_str(&write_footer());
    out
}

/// Stream the model as an XMI document into `writer`.
pub fn write_xmi<W: Write>(model: &Model, mut writer: W) -> io::Result<()> {
    writer.write_all(write_header(model).as_bytes())?;
    for class in &model.classes {
        writer.write_all(write_class(class).as_bytes())?;
    }
    writer.write_all(write_footer().as_bytes())?;
    writer.flush()
}

/// XML declaration and the opening `uml:Model` tag.
pub fn write_header(model: &Model) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <uml:Model xmi:version=\"{XMI_VERSION}\" xmlns:xmi=\"{XMI_NAMESPACE}\" xmlns:uml=\"{UML_NAMESPACE}\" xmi:id=\"{}\" name=\"{}\">\n",
        escape_xml(model.id.as_str()),
        escape_xml(&model.name)
    )
}

/// A `packagedElement` for the class with one `ownedAttribute` per attribute.
pub fn write_class(class: &Class) -> String {
    let mut out = format!(
        "  <packagedElement xmi:type=\"uml:Class\" xmi:id=\"{}\" name=\"{}\">\n",
        escape_xml(class.id.as_str()),
        escape_xml(&class.name)
    );
    for attribute in &class.attributes {
        write_attribute(&mut out, attribute);
    }
    out.push_str("  </packagedElement>\n");
    out
}

/// Closing `uml:Model` tag.
pub fn write_footer() -> String {
    "</uml:Model>\n".to_string()
}

fn write_attribute(out: &mut String, attribute: &Attribute) {
    let key = attribute
        .key
        .map(|key| format!(" key=\"{}\"", key.as_str()))
        .unwrap_or_default();

    out.push_str(&format!(
        "    <ownedAttribute xmi:id=\"{}\" name=\"{}\"{key} visibility=\"{}\" isUnique=\"{}\">\n",
        escape_xml(attribute.id.as_str()),
        escape_xml(&attribute.name),
        attribute.visibility.as_str(),
        attribute.is_unique,
    ));
    out.push_str(&format!(
        "      <type xmi:type=\"{}\" href=\"{}\"/>\n",
        attribute.type_ref.kind.as_str(),
        attribute.type_ref.href()
    ));
    out.push_str("    </ownedAttribute>\n");
}

/// Escape text for use inside a double-quoted XML attribute value.
pub fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
