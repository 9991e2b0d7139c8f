use sort_collection_rs::{CharactersCollection, NumbersCollection, Sorter};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr, stdout only carries the sorted sequences.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sort_collection_rs=info")),
        )
        .init();

    let mut numbers = NumbersCollection::new(vec![10, 11, -5, 0]);
    Sorter::new(&mut numbers).sort();
    info!(len = numbers.len(), "sorted numbers through sorter");
    println!("{:?}", numbers.data());

    let mut characters = CharactersCollection::from("arstueneincxEINYITAA");
    characters.sort();
    info!(len = characters.len(), "sorted characters");
    println!("{:?}", characters.data());
}
