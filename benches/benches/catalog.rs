// Copyright 2026 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `tailor_sheet` and `tailor_controls`: catalog lookup,
//! declarative loading and highlight restyling.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use tailor_controls::StyledButton;
use tailor_sheet::decl::SheetDecl;
use tailor_sheet::{AppStyles, PRIMARY, SECONDARY_BUTTON, StyleSheetBuilder};
use tailor_view::Button;

const DECL: &str = r#"{
    "styles": {
        "base": { "background": "white", "border_width": 2, "corner_radius": 8 },
        "primary": { "extends": "base", "title_color": "white", "font": "title3" },
        "secondary": { "extends": "base", "background": "transparent", "border_width": 0 },
        "link": { "extends": "secondary", "title_color": "#007aff" }
    }
}"#;

fn bench_catalog(c: &mut Criterion) {
    let styles = AppStyles::builtin();

    let mut group = c.benchmark_group("catalog/lookup");
    group.bench_function("builtin_hit", |b| {
        b.iter(|| black_box(styles.buttons.get(black_box(SECONDARY_BUTTON))));
    });
    group.bench_function("builtin_miss", |b| {
        b.iter(|| black_box(styles.buttons.get(black_box("tertiary_button"))));
    });

    let names: Vec<String> = (0..256).map(|i| format!("style_{i:03}")).collect();
    let large = names
        .iter()
        .fold(StyleSheetBuilder::new(), |builder, name| {
            builder.insert(name.as_str(), name.len())
        })
        .build();
    group.bench_function("256_entries", |b| {
        b.iter(|| black_box(large.get(black_box("style_200"))));
    });
    group.finish();

    let mut group = c.benchmark_group("catalog/load");
    group.bench_function("builtin", |b| b.iter(|| black_box(AppStyles::builtin())));
    group.bench_function("json", |b| {
        b.iter(|| {
            let decl: SheetDecl = serde_json::from_str(black_box(DECL)).unwrap();
            black_box(decl.build_button_sheet().unwrap())
        });
    });
    group.finish();

    let mut group = c.benchmark_group("catalog/restyle");
    group.bench_function("primary_highlight_toggle", |b| {
        let style = styles.controls.get(PRIMARY).unwrap().clone();
        let mut button = StyledButton::new(Button::new("Primary"), style).unwrap();
        let mut highlighted = false;
        b.iter(|| {
            highlighted = !highlighted;
            black_box(button.set_highlighted(highlighted).unwrap())
        });
    });
    group.finish();
}

criterion_group!(benches, bench_catalog);
criterion_main!(benches);
