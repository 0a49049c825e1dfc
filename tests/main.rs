use sort_test_tools::{instantiate_search_tests, instantiate_sort_tests};

use sort_search_rs::{searches, sorts};

instantiate_sort_tests!(insertion => sorts::insertion::SortImpl);
instantiate_sort_tests!(selection => sorts::selection::SortImpl);
instantiate_sort_tests!(bubble => sorts::bubble::SortImpl);
instantiate_sort_tests!(merge => sorts::merge::SortImpl);
instantiate_sort_tests!(quick => sorts::quick::SortImpl);
// Sorts a copy, the shared tests check that the input stays untouched.
instantiate_sort_tests!(library => sorts::library::SortImpl);

instantiate_search_tests!(linear => searches::linear::SearchImpl);
instantiate_search_tests!(binary => searches::binary::SearchImpl);
instantiate_search_tests!(library_search => searches::library::SearchImpl);
