//! Tests for stacked indent scopes and target restoration.

use std::io::Result;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::rc::Rc;

use crate::tests::capture;
use crate::{
    InMemorySink, Indent, IndentGuard, current_depth, current_target, iprintln, shared,
    with_target,
};

fn recursively_indent(text: &str, levels: usize, indent: &Indent) -> Result<()> {
    if levels > 0 {
        indent.scope(|| recursively_indent(text, levels - 1, indent))
    } else {
        iprintln!("{text}")
    }
}

fn nested_guards(indent: &Indent, n: usize) -> Vec<IndentGuard> {
    (0..n).map(|_| indent.enter()).collect()
}

fn exit_all(mut guards: Vec<IndentGuard>) {
    while let Some(guard) = guards.pop() {
        drop(guard);
    }
}

#[test]
fn statically_nested() {
    for n in 0..=20 {
        let out = capture(|| {
            let guards = nested_guards(&Indent::default(), n);
            let printed = iprintln!("hello");
            exit_all(guards);
            printed
        });
        assert_eq!(out, format!("{}hello\n", " ".repeat(4 * n)));
    }
}

#[test]
fn recursively_nested() {
    let indent = Indent::default();
    for levels in [0, 1, 2, 50, 150] {
        let out = capture(|| recursively_indent("hello", levels, &indent));
        assert_eq!(out, format!("{}hello\n", " ".repeat(4 * levels)));
    }
}

#[test]
fn nested_blockquotes() {
    let quote = Indent::with_string("> ");
    for n in 0..=20 {
        let out = capture(|| recursively_indent("hello", n, &quote));
        assert_eq!(out, format!("{}hello\n", "> ".repeat(n)));
    }
}

#[test]
fn nested_markdown() {
    let out = capture(|| {
        Indent::with_string("> ").scope(|| {
            iprintln!("Blockquoted.")?;
            iprintln!()?;
            Indent::with_string("    ").scope(|| {
                iprintln!("code")?;
                iprintln!("more code")
            })?;
            iprintln!()?;
            iprintln!("End of blockquote.")
        })
    });
    assert_eq!(
        out,
        "> Blockquoted.\n\
         > \n\
         >     code\n\
         >     more code\n\
         > \n\
         > End of blockquote.\n"
    );
}

struct Node {
    name: &'static str,
    children: Vec<Node>,
}

fn node(name: &'static str, children: Vec<Node>) -> Node {
    Node { name, children }
}

fn print_tree(children: &[Node]) -> Result<()> {
    const MARKERS: [(&str, &str); 2] = [("├── ", "│   "), ("└── ", "    ")];
    for (i, child) in children.iter().enumerate() {
        let (name_indent, subtree_indent) = MARKERS[usize::from(i + 1 == children.len())];
        Indent::with_string(name_indent).scope(|| iprintln!("{}", child.name))?;
        Indent::with_string(subtree_indent).scope(|| print_tree(&child.children))?;
    }
    Ok(())
}

#[test]
fn prints_tree() {
    let tree = vec![
        node("alpha", vec![]),
        node(
            "beta",
            vec![node("beta.alpha", vec![]), node("beta.beta", vec![])],
        ),
        node(
            "charlie",
            vec![
                node("charlie.alpha", vec![]),
                node("charlie.beta", vec![node("charlie.beta.alpha", vec![])]),
                node("charlie.charlie", vec![]),
            ],
        ),
        node("delta", vec![]),
    ];

    let out = capture(|| {
        iprintln!(".")?;
        print_tree(&tree)
    });

    assert_eq!(
        out,
        ".\n\
         ├── alpha\n\
         ├── beta\n\
         │   ├── beta.alpha\n\
         │   └── beta.beta\n\
         ├── charlie\n\
         │   ├── charlie.alpha\n\
         │   ├── charlie.beta\n\
         │   │   └── charlie.beta.alpha\n\
         │   └── charlie.charlie\n\
         └── delta\n"
    );
}

#[test]
fn exit_restores_the_exact_prior_target() {
    let sink = shared(InMemorySink::new("out"));
    with_target(Rc::clone(&sink), || {
        let before = current_target();
        assert!(Rc::ptr_eq(&before, &sink));

        let outer = Indent::default().enter();
        let inner = Indent::with_string("> ").enter();
        assert!(!Rc::ptr_eq(&current_target(), &before));
        drop(inner);
        let after_inner = current_target();
        drop(outer);

        assert!(!Rc::ptr_eq(&after_inner, &before));
        assert!(Rc::ptr_eq(&current_target(), &before));
    });
}

#[test]
fn guards_count_nesting_depth() {
    let base = current_depth();
    let outer = Indent::default().enter();
    let inner = Indent::default().enter();

    assert_eq!(outer.depth(), base + 1);
    assert_eq!(inner.depth(), base + 2);
    assert_eq!(current_depth(), base + 2);

    drop(inner);
    drop(outer);
    assert_eq!(current_depth(), base);
}

#[test]
fn unwinding_restores_the_prior_target() {
    let sink = shared(InMemorySink::new("out"));
    with_target(Rc::clone(&sink), || {
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _guard = Indent::default().enter();
            panic!("boom");
        }));

        assert!(result.is_err());
        assert!(Rc::ptr_eq(&current_target(), &sink));
    });
}

#[test]
fn same_indent_entered_twice_stacks() {
    let indent = Indent::with_string("* ");
    let out = capture(|| {
        let guards = vec![indent.enter(), indent.enter()];
        let printed = iprintln!("twice");
        exit_all(guards);
        printed
    });
    assert_eq!(out, "* * twice\n");
}
