use contactbook_contacts::{Directory, Record};

fn main() -> anyhow::Result<()> {
    contactbook_observability::init();

    let mut book = Directory::new();

    let mut john = Record::new("John");
    john.add_phone("1234567890")?;
    john.add_phone("5555555555")?;
    book.add_record(john)?;

    let mut jane = Record::new("Jane");
    jane.add_phone("9876543210")?;
    book.add_record(jane)?;

    for (_, record) in book.iter() {
        println!("{record}");
    }

    let john = book.find_mut("John")?;
    john.edit_phone("1234567890", "1112223333")?;
    println!("{john}");

    if let Some(found) = john.find_phone("5555555555") {
        println!("{}: {found}", john.name());
    }

    book.delete("Jane")?;
    tracing::info!(remaining = book.len(), "demo finished");

    Ok(())
}
