// Copyright 2026 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative style sheets.
//!
//! Load button styles from `demos/catalog.json` (or the path given as the
//! first argument) and style one button per entry.
//!
//! Run:
//! - `cargo run -p tailor_demos --example json_catalog`
//! - `cargo run -p tailor_demos --example json_catalog -- path/to/sheet.json`

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use kurbo::Rect;
use tailor_compose::Styleable;
use tailor_demos::DemoStack;
use tailor_sheet::decl::SheetDecl;
use tailor_view::Button;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("catalog.json"));
    log::info!("loading {}", path.display());

    let decl: SheetDecl = serde_json::from_str(&fs::read_to_string(&path)?)?;
    let sheet = decl.build_button_sheet()?;
    log::info!("{} style(s): {:?}", sheet.len(), sheet.names().collect::<Vec<_>>());

    let mut stack = DemoStack::new(10.0);
    for (name, style) in sheet.iter() {
        stack.push(Button::new(name).try_with_style(style)?);
    }
    stack.layout(Rect::new(0.0, 0.0, 375.0, 667.0));
    print!("{stack}");
    Ok(())
}
