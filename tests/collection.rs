use sort_collection_rs::{
    CharactersCollection, Collection, Error, NumbersCollection, Sortable, Sorter,
};

#[test]
fn numbers_through_sorter() {
    let mut numbers = NumbersCollection::new(vec![10, 11, -5, 0]);
    Sorter::new(&mut numbers).sort();
    assert_eq!(numbers.data(), [-5, 0, 10, 11]);
    assert_eq!(numbers.to_string(), "[-5, 0, 10, 11]");
}

#[test]
fn characters_direct() {
    let input = "arstueneincxEINYITAA";
    let mut characters = CharactersCollection::from(input);
    characters.sort();
    assert_eq!(
        characters.data(),
        [
            'A', 'A', 'E', 'I', 'I', 'N', 'T', 'Y', 'a', 'c', 'e', 'e', 'i', 'n', 'n', 'r', 's',
            't', 'u', 'x'
        ]
    );
    assert_eq!(
        characters.to_string(),
        "['A', 'A', 'E', 'I', 'I', 'N', 'T', 'Y', 'a', 'c', 'e', 'e', 'i', 'n', 'n', 'r', 's', \
         't', 'u', 'x']"
    );

    // Same multiset as the input, in code point order.
    let mut expected: Vec<char> = input.chars().collect();
    expected.sort();
    assert_eq!(characters.data(), expected.as_slice());
}

#[test]
fn empty_and_single() {
    let mut empty = NumbersCollection::default();
    empty.sort();
    assert!(empty.is_empty());
    assert_eq!(empty.to_string(), "[]");

    let mut single = CharactersCollection::from("z");
    Sorter::new(&mut single).sort();
    assert_eq!(single.data(), ['z']);
}

#[test]
fn sorted_input_unchanged() {
    let mut numbers: NumbersCollection = (1..=20).collect();
    numbers.sort();
    assert_eq!(numbers.clone().into_inner(), (1..=20).collect::<Vec<i64>>());

    numbers.sort_unstable();
    assert_eq!(numbers.into_inner(), (1..=20).collect::<Vec<i64>>());
}

#[test]
fn unstable_and_custom_order() {
    let mut numbers = NumbersCollection::from(&[3, -1, 3, 7, 0][..]);
    numbers.sort_unstable();
    assert_eq!(numbers.data(), [-1, 0, 3, 3, 7]);

    numbers.sort_by(|a, b| b.cmp(a));
    assert_eq!(numbers.data(), [7, 3, 3, 0, -1]);
}

#[test]
fn sort_by_is_stable() {
    let mut words = Collection::new(vec!["pear", "fig", "plum", "kiwi", "apple", "date"]);
    words.sort_by(|a, b| a.len().cmp(&b.len()));
    assert_eq!(words.data(), ["fig", "pear", "plum", "kiwi", "date", "apple"]);
}

#[test]
fn element_operations() {
    let mut numbers = NumbersCollection::new(vec![10, 11, -5, 0]);
    assert_eq!(numbers.len(), 4);
    assert!(!numbers.compare(0, 1));
    assert!(numbers.compare(1, 2));

    numbers.swap(0, 3);
    assert_eq!(numbers.data(), [0, 11, -5, 10]);
}

// Sortable only through element access, sorted by the provided `Sortable::sort`.
struct Linked {
    values: std::collections::VecDeque<u8>,
}

impl Sortable for Linked {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn compare(&self, left: usize, right: usize) -> bool {
        self.values[left] > self.values[right]
    }

    fn swap(&mut self, left: usize, right: usize) {
        self.values.swap(left, right);
    }
}

#[test]
fn sorter_drives_any_sortable() {
    let mut linked = Linked {
        values: [9, 3, 3, 200, 0, 1].into_iter().collect(),
    };

    let mut sorter = Sorter::new(&mut linked);
    sorter.sort();
    assert_eq!(sorter.collection().len(), 6);

    assert!(linked.values.iter().eq([0, 1, 3, 3, 9, 200].iter()));

    let mut empty = Linked {
        values: Default::default(),
    };
    Sorter::new(&mut empty).sort();
    assert!(empty.is_empty());
}

// Orders by key only, so equal keys expose whether the provided sort keeps their order.
struct Keyed {
    entries: Vec<(u8, char)>,
}

impl Sortable for Keyed {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn compare(&self, left: usize, right: usize) -> bool {
        self.entries[left].0 > self.entries[right].0
    }

    fn swap(&mut self, left: usize, right: usize) {
        self.entries.swap(left, right);
    }
}

#[test]
fn provided_sort_matches_collection_sort() {
    let entries = vec![
        (3, 'a'),
        (1, 'b'),
        (3, 'c'),
        (0, 'd'),
        (1, 'e'),
        (3, 'f'),
        (2, 'g'),
    ];

    let mut keyed = Keyed {
        entries: entries.clone(),
    };
    Sorter::new(&mut keyed).sort();

    let mut collection = Collection::new(entries);
    collection.sort_by(|a, b| a.0.cmp(&b.0));

    assert_eq!(keyed.entries, collection.data());
    assert_eq!(
        keyed.entries,
        [
            (0, 'd'),
            (1, 'b'),
            (1, 'e'),
            (2, 'g'),
            (3, 'a'),
            (3, 'c'),
            (3, 'f')
        ]
    );
}

#[test]
fn sorter_over_trait_object() {
    let mut numbers = NumbersCollection::new(vec![2, 1]);
    let sortable: &mut dyn Sortable = &mut numbers;
    Sorter::new(sortable).sort();
    assert_eq!(numbers.data(), [1, 2]);
}

#[test]
fn parse_numbers() {
    let numbers: NumbersCollection = "[10, 11, -5, 0]".parse().unwrap();
    assert_eq!(numbers.data(), [10, 11, -5, 0]);

    let numbers: NumbersCollection = " 1,2 ,3 ".parse().unwrap();
    assert_eq!(numbers.data(), [1, 2, 3]);

    let numbers: NumbersCollection = "[]".parse().unwrap();
    assert!(numbers.is_empty());

    let numbers: NumbersCollection = "".parse().unwrap();
    assert!(numbers.is_empty());
}

#[test]
fn parse_numbers_errors() {
    let err = "[1, , 3]".parse::<NumbersCollection>().unwrap_err();
    assert!(matches!(err, Error::EmptyElement { position: 1 }));

    let err = "1, 2,".parse::<NumbersCollection>().unwrap_err();
    assert!(matches!(err, Error::EmptyElement { position: 2 }));

    let err = "[4, x7]".parse::<NumbersCollection>().unwrap_err();
    assert!(matches!(
        &err,
        Error::InvalidNumber { position: 1, text, .. } if text == "x7"
    ));
    assert_eq!(err.to_string(), "element 1 is not a valid integer: `x7`");
    assert!(std::error::Error::source(&err).is_some());
}
