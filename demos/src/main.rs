// SPDX-License-Identifier: Apache-2.0

// Parses a JSON file, prints its label outline and, when a label is given,
// decodes the first node carrying it.
//
// Usage: demos <file.json> [label]

use std::process::ExitCode;

use jsontree::{NodeRef, ValueAccess};

fn describe(node: NodeRef<'_, '_>) {
    println!("kind:     {:?}", node.kind());
    if node.kind().is_container() {
        println!("children: {}", node.children().count());
        return;
    }
    println!("number:   {}", node.to_number());
    println!("bool:     {}", node.to_bool());
    println!("null:     {}", node.is_null());
    println!("char:     {:?}", char::from(node.to_char()));
    match node.to_new_string() {
        Some(raw) => println!("raw:      {}", String::from_utf8_lossy(&raw)),
        None => println!("raw:      <empty>"),
    }
    match node.try_resolve() {
        Ok(resolved) => println!("resolved: {resolved:02x?}"),
        Err(e) => println!("resolved: {e}"),
    }
}

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: demos <file.json> [label]");
        return ExitCode::FAILURE;
    };

    let input = match std::fs::read(&path) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("cannot read {path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let document = match jsontree::parse(&input) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("{path}: {e}");
            return ExitCode::FAILURE;
        }
    };
    print!("{document}");
    println!("{} nodes", document.node_count());

    if let Some(label) = args.next() {
        let found = document.find(&label);
        match found.node() {
            Some(node) => describe(node),
            None => println!("'{label}' not found"),
        }
    }
    ExitCode::SUCCESS
}
