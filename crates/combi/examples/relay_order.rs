//! Relay-team running orders: ordered selection demo.

use combi::{Explorer, Item, ItemSet, SelectionMode};

fn main() {
    let runners = ItemSet::new(vec![
        Item::new("ren", "Ren"),
        Item::new("mia", "Mia"),
        Item::new("kai", "Kai"),
        Item::new("sol", "Sol"),
    ]);
    let explorer = Explorer::new(runners);

    let select = 2;
    let count = explorer.count(SelectionMode::Ordered, select);
    println!("Pick {select} of 4 runners, order matters: {count} line-ups\n");

    for (i, lineup) in explorer.arrangements(select).iter().enumerate() {
        let names: Vec<&str> = lineup.items().iter().map(|it| it.label.as_str()).collect();
        println!("{:>2}. {}", i + 1, names.join(" -> "));
    }
}
