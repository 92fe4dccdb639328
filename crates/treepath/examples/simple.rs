use treepath::{
    DESCENDANT_MARKER, ElementNode, ElementSet, compile_selector_path,
    simple_element::{doc, elem},
};

fn main() {
    let tree = doc()
        .child(
            elem("catalog")
                .child(
                    elem("section")
                        .attr("name", "fiction")
                        .child(elem("book").attr("id", "b1").attr("class", "featured"))
                        .child(elem("book").attr("id", "b2")),
                )
                .child(
                    elem("section")
                        .attr("name", "reference")
                        .child(elem("book").attr("id", "b3").attr("class", "featured")),
                ),
        )
        .build();

    let query = compile_selector_path(["catalog", DESCENDANT_MARKER, "book.featured"]).unwrap();
    println!("Query: {query}");

    let found = query.execute(&ElementSet::singleton(tree));
    for book in &found {
        println!("{book} id={:?}", book.attribute(&"id".into()));
    }
}
