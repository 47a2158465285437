use mdcanvas::LayoutOptions;
use mdcanvas::canvas::layout::{embed_reference, measure};
use mdcanvas::canvas::render;
use mdcanvas::model::Document;

fn doc(name: &str, content: &str) -> Document {
    Document {
        name: name.into(),
        content: content.into(),
    }
}

#[test]
fn height_formula() {
    let options = LayoutOptions::default();
    // 4 lines, one of them naming an image: 4*30 + 1*250.
    let text = "one\ntwo\nsee diagram.png\nfour";
    assert_eq!(measure(text, &options), 370);

    assert_eq!(measure("single line", &options), 30);
    // A trailing empty line still counts.
    assert_eq!(measure("single line\n", &options), 60);
    assert_eq!(measure("", &options), 30);
}

#[test]
fn image_extension_matching_is_case_sensitive_and_extensible() {
    let mut options = LayoutOptions::default();
    assert_eq!(measure("photo.jpg", &options), 280);
    assert_eq!(measure("PHOTO.JPG", &options), 30);

    options.image_extensions.push(".webp".into());
    assert_eq!(measure("pic.webp", &options), 280);
}

#[test]
fn two_level_scenario_emits_three_stacked_nodes() {
    let options = LayoutOptions::default();
    let docs = [doc("Note.md", "# A\nHello\n## B\nWorld\n## C\nBye")];
    let nodes = render(&docs, &options);

    assert_eq!(nodes.len(), 3);

    // Title node at the column origin, children indented by sub_x_offset.
    assert_eq!(nodes[0].x, 0);
    assert_eq!(nodes[0].y, 50);
    assert_eq!(nodes[0].height, 60);
    assert_eq!(nodes[0].text, "# A\nHello");

    assert_eq!(nodes[1].x, 50);
    assert_eq!(nodes[1].y, 160);
    assert_eq!(nodes[1].text, "![[Note#B]]");

    assert_eq!(nodes[2].x, 50);
    assert_eq!(nodes[2].y, 240);
    assert_eq!(nodes[2].text, "![[Note#C]]");

    for node in &nodes {
        assert_eq!(node.width, options.node_width);
    }

    let mut ys: Vec<i64> = nodes.iter().map(|n| n.y).collect();
    let sorted = ys.clone();
    ys.sort_unstable();
    assert_eq!(ys, sorted, "y must strictly increase within a column");
}

#[test]
fn consecutive_nodes_never_overlap() {
    let options = LayoutOptions::default();
    let content = "# One\na\nb\nimage.png\n## Two\nc\nd\n## Three\ne\n# Four\nf\ng\nh";
    let nodes = render(&[doc("Note.md", content)], &options);
    assert_eq!(nodes.len(), 4);

    for pair in nodes.windows(2) {
        assert!(
            pair[1].y >= pair[0].y + pair[0].height + options.gap,
            "node at y={} overlaps node at y={} (height {})",
            pair[1].y,
            pair[0].y,
            pair[0].height,
        );
    }
}

#[test]
fn columns_occupy_disjoint_x_ranges() {
    let options = LayoutOptions::default();
    let docs = [
        doc("A.md", "# A\nx\n## S\ny"),
        doc("B.md", "# B\nx"),
        doc("C.md", "# C\nx\n## T\ny"),
    ];
    let nodes = render(&docs, &options);

    for (index, _) in docs.iter().enumerate() {
        let lo = index as i64 * options.column_width;
        let hi = lo + options.column_width;
        let column: Vec<_> = nodes.iter().filter(|n| n.x >= lo && n.x < hi).collect();
        assert!(!column.is_empty(), "column {index} is empty");
        for node in &column {
            assert!(node.x + node.width <= hi, "node leaks out of column {index}");
        }
    }
}

#[test]
fn heading_less_document_still_reserves_its_column() {
    let options = LayoutOptions::default();
    let docs = [
        doc("Empty.md", "no headings in here\njust text"),
        doc("Full.md", "# A\nHello"),
    ];
    let nodes = render(&docs, &options);

    assert_eq!(nodes.len(), 1);
    // The empty note consumed column 0; the only node sits in column 1.
    assert_eq!(nodes[0].x, options.column_width);
}

#[test]
fn orphan_children_continue_the_column_cursor() {
    let options = LayoutOptions::default();
    let nodes = render(&[doc("Note.md", "# \n## B\nWorld\n## C\nBye")], &options);

    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0].x, options.sub_x_offset);
    assert_eq!(nodes[0].y, 50);
    assert_eq!(nodes[1].x, options.sub_x_offset);
    assert_eq!(nodes[1].y, 130);
}

#[test]
fn render_is_idempotent() {
    let options = LayoutOptions::default();
    let docs = [
        doc("A.md", "# A\nHello\n## B\nWorld"),
        doc("B.md", "# B\npic.png"),
    ];
    assert_eq!(render(&docs, &options), render(&docs, &options));
}

#[test]
fn overridden_constants_flow_through() {
    let options = LayoutOptions {
        line_height: 10,
        image_height: 100,
        gap: 5,
        column_width: 200,
        node_width: 80,
        sub_x_offset: 20,
        ..LayoutOptions::default()
    };
    let docs = [doc("A.md", "# A\nx"), doc("B.md", "# B\npic.png")];
    let nodes = render(&docs, &options);

    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0].y, 5);
    assert_eq!(nodes[0].height, 20);
    assert_eq!(nodes[0].width, 80);
    assert_eq!(nodes[1].x, 200);
    assert_eq!(nodes[1].height, 120);
}

#[test]
fn embed_reference_strips_extension() {
    assert_eq!(embed_reference("Notes.md", "Intro"), "![[Notes#Intro]]");
    assert_eq!(embed_reference("Notes", "Intro"), "![[Notes#Intro]]");
    assert_eq!(
        embed_reference("Notes.v2.md", "Intro"),
        "![[Notes.v2#Intro]]"
    );
}

#[test]
fn embed_reference_normalizes_hash_c_fragments() {
    assert_eq!(
        embed_reference("Setup.md", "Topic #cats"),
        "![[Setup#Topic cats]]"
    );
    assert_eq!(
        embed_reference("Setup.md", "Setup #config"),
        "![[Setup#Setup config]]"
    );
    // Other `#`-prefixed words are left alone.
    assert_eq!(
        embed_reference("Setup.md", "Topic #dogs"),
        "![[Setup#Topic #dogs]]"
    );
}
