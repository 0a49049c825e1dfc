use sort_search_rs::error::SelectionError;
use sort_search_rs::registry::{parse_ordinal, search_registry, sort_registry, SortRegistry};
use sort_search_rs::sorts;

#[test]
fn sort_registry_display_order() {
    let names = sort_registry().names().collect::<Vec<_>>();
    assert_eq!(
        names,
        [
            "insertion_sort",
            "selection_sort",
            "bubble_sort",
            "merge_sort",
            "quick_sort",
            "library_sort"
        ]
    );
}

#[test]
fn search_registry_display_order() {
    let names = search_registry().names().collect::<Vec<_>>();
    assert_eq!(names, ["linear_search", "binary_search", "library_search"]);
}

#[test]
fn registered_name_matches_strategy_name() {
    for (name, strategy) in sort_registry().iter() {
        assert_eq!(name, strategy.name());
    }
    for (name, strategy) in search_registry().iter() {
        assert_eq!(name, strategy.name());
    }
}

#[test]
fn only_library_sort_is_not_in_place() {
    let not_in_place = sort_registry()
        .iter()
        .filter(|(_, strategy)| !strategy.in_place())
        .map(|(name, _)| name)
        .collect::<Vec<_>>();

    assert_eq!(not_in_place, ["library_sort"]);
}

#[test]
fn only_binary_search_requires_sorted() {
    let requires_sorted = search_registry()
        .iter()
        .filter(|(_, strategy)| strategy.requires_sorted())
        .map(|(name, _)| name)
        .collect::<Vec<_>>();

    assert_eq!(requires_sorted, ["binary_search"]);
}

#[test]
fn by_ordinal_is_one_based() {
    let registry = sort_registry();

    let (name, strategy) = registry.by_ordinal(1).unwrap();
    assert_eq!(name, "insertion_sort");

    let mut v = [3, 1, 2];
    strategy.run(&mut v);
    assert_eq!(v, [1, 2, 3]);

    let (name, _) = registry.by_ordinal(6).unwrap();
    assert_eq!(name, "library_sort");
}

#[test]
fn by_ordinal_out_of_range() {
    let registry = sort_registry();

    assert_eq!(
        registry.by_ordinal(0).err(),
        Some(SelectionError::OutOfRange { choice: 0, len: 6 })
    );
    assert_eq!(
        registry.by_ordinal(7).err(),
        Some(SelectionError::OutOfRange { choice: 7, len: 6 })
    );
}

#[test]
fn choice_parses_menu_answer() {
    let registry = search_registry();

    let (name, _) = registry.choice(" 2\n").unwrap();
    assert_eq!(name, "binary_search");

    assert_eq!(
        registry.choice("two").err(),
        Some(SelectionError::NotANumber("two".into()))
    );
    assert_eq!(
        registry.choice("-1").err(),
        Some(SelectionError::NotANumber("-1".into()))
    );
    assert_eq!(
        registry.choice("4").err(),
        Some(SelectionError::OutOfRange { choice: 4, len: 3 })
    );
}

#[test]
fn parse_ordinal_bounds() {
    assert_eq!(parse_ordinal("1", 4), Ok(1));
    assert_eq!(parse_ordinal("4", 4), Ok(4));
    assert_eq!(
        parse_ordinal("5", 4),
        Err(SelectionError::OutOfRange { choice: 5, len: 4 })
    );
    assert_eq!(
        parse_ordinal("", 4),
        Err(SelectionError::NotANumber(String::new()))
    );
}

#[test]
fn get_by_name() {
    assert!(sort_registry().get("merge_sort").is_ok());
    assert_eq!(
        sort_registry().get("bogo_sort").err(),
        Some(SelectionError::UnknownName("bogo_sort".into()))
    );
}

#[test]
fn custom_registry_keeps_insertion_order() {
    let mut registry = SortRegistry::new();
    assert!(registry.is_empty());

    registry
        .register("quick", Box::new(sorts::quick::SortImpl))
        .register("bubble", Box::new(sorts::bubble::SortImpl));

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.names().collect::<Vec<_>>(), ["quick", "bubble"]);
    assert_eq!(registry.by_ordinal(2).unwrap().0, "bubble");
}
