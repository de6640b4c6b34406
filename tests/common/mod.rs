use tactile::{
    InMemoryMasterRegistry, MasterCapabilities, PageDimensions, Row, SequenceBreak,
    SequenceProperties, SequenceRun,
};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// A master set covering the transitions the resolver has to handle:
/// duplex body text, a wider duplex master, and simplex note pages.
pub fn standard_masters() -> InMemoryMasterRegistry {
    let masters = InMemoryMasterRegistry::new();
    masters.add(
        "body",
        MasterCapabilities::new(true, PageDimensions::new(32, 27)),
    );
    masters.add(
        "wide",
        MasterCapabilities::new(true, PageDimensions::new(38, 27)),
    );
    masters.add(
        "notes",
        MasterCapabilities::new(false, PageDimensions::new(32, 27)),
    );
    masters
}

pub fn page(lines: usize) -> Vec<Row> {
    (0..lines)
        .map(|i| Row::new(format!("⠇⠊⠝⠑ {i}")))
        .collect()
}

pub fn pages(count: usize) -> Vec<Vec<Row>> {
    (0..count).map(|_| page(3)).collect()
}

pub fn simple_run(master: &str, count: usize) -> SequenceRun {
    SequenceRun::new(SequenceProperties::builder(master).build(), pages(count))
}

pub fn breaking_run(
    master: &str,
    break_before: SequenceBreak,
    break_after: SequenceBreak,
    count: usize,
) -> SequenceRun {
    SequenceRun::new(
        SequenceProperties::builder(master)
            .break_before(break_before)
            .break_after(break_after)
            .build(),
        pages(count),
    )
}
