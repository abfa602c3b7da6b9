// Common test utilities and fixtures

#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;

pub const WIDGET: &str = r#"
package com.example.models;

public class Widget {
    private String name;
    private int count;
}
"#;

pub const STYLED_BANNER: &str = r#"
package com.example.models;

import java.util.List;
import javax.persistence.Transient;

public class StyledBanner extends FoundationConfigurableContent {
    public static final String TEMPLATE = "banner";

    private String headline;
    private List<String> slides;
    private Boolean autoPlay;

    @Transient
    private String renderedHtml;

    private LinkItem link;
}
"#;

/// Write Java source to a temporary `.java` file that lives as long as the handle
pub fn write_fixture(source: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".java")
        .tempfile()
        .expect("create temp file");
    file.write_all(source.as_bytes()).expect("write fixture");
    file
}
