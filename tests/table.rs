use spectone::{render_table, Catalog};

// Colors are forced on here, so this lives apart from the unit tests that render plain text
#[test]
fn playing_elements_are_highlighted() {
    colored::control::set_override(true);
    let catalog = Catalog::builtin().unwrap();
    let idle = render_table(&catalog, &[]);
    let playing = render_table(&catalog, &["na"]);
    let period = |table: &str, n: usize| table.lines().nth(n).map(String::from);
    // Sodium is in period 3
    assert_ne!(period(&idle, 3), period(&playing, 3));
    for n in (0..3).chain(4..7) {
        assert_eq!(period(&idle, n), period(&playing, n));
    }
}
