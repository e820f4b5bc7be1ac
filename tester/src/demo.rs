use slist::{Cursor, SinglyLinkedList};

fn print_read_only(list: &SinglyLinkedList<String>) {
    let mut it = list.begin();
    while it != list.end() {
        println!("  {}", *it);
        it.move_next();
    }
}

/// Builds a small list of names and shows it through both cursor kinds, then copies and
/// reassigns it.
pub fn run() {
    let mut names = SinglyLinkedList::new();
    names.push_front(String::from("Copernicus"));
    names.push_front(String::from("Bob"));
    names.push_front(String::from("Alice"));
    log::info!("built a list of {} names", names.len());

    println!("read-only cursor:");
    print_read_only(&names);

    println!("read-write cursor:");
    let mut it = names.begin_mut();
    while !it.is_end() {
        it.make_ascii_uppercase();
        println!("  {}", *it);
        it.move_next();
    }

    // a read-write position converts into a read-only one, never the other way
    let first: Cursor<'_, String> = names.begin_mut().into();
    println!("first, through a converted cursor: {}", first.to_lowercase());

    let copy = names.clone();
    names.push_front(String::from("Zed"));
    println!("copy taken before pushing Zed:");
    print_read_only(&copy);

    let mut assigned = SinglyLinkedList::new();
    assigned.push_front(String::from("placeholder"));
    assigned.clone_from(&names);
    println!("assigned from the original:");
    print_read_only(&assigned);
}
