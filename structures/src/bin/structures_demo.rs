//! Runner that demonstrates every structure in `structures/src`.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use structures::computation_map::STRUCTURES_COMPUTATION_MAP;
use structures::config::DemoConfig;
use structures::data_structures::{
    BinaryTree, CircularLinkedList, DoublyLinkedList, HashTable, Queue, SinglyLinkedList, Stack,
};
use structures::graph::Graph;
use structures::parsing_compilation::ExpressionCalculator;

#[derive(Parser)]
#[command(name = "structures-demo", about = "Linked data structures demonstration", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build and print every structure.
    Tour {
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Evaluate infix expressions.
    Calc {
        #[arg(required = true)]
        exprs: Vec<String>,
    },
    /// Print the operation/complexity table.
    Map,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "structures=info,structures_demo=info".into()),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Command::Tour { config } => {
            let cfg = match config {
                Some(path) => DemoConfig::load(&path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => DemoConfig::default(),
            };
            info!(?cfg, "starting tour");
            tour(&cfg)?;
        }
        Command::Calc { exprs } => {
            let mut calc = ExpressionCalculator::new();
            for expr in exprs {
                match calc.evaluate(&expr) {
                    Ok(v) => println!("{expr} = {v}"),
                    Err(e) => println!("{expr} -> error: {e}"),
                }
            }
        }
        Command::Map => {
            for (path, kind, cost) in STRUCTURES_COMPUTATION_MAP {
                println!("{:<55} | {:<28} | {}", path, kind, cost);
            }
        }
    }
    Ok(())
}

fn tour(cfg: &DemoConfig) -> anyhow::Result<()> {
    println!("=== Linked lists ===");
    {
        let mut list: SinglyLinkedList<i32> = (1..=3).collect();
        list.prepend(0);
        list.insert(-4, -1);
        list.insert(99, 4);
        println!("singly:   {list} (size {})", list.len());
        println!("remove 2: {} -> {list}", list.remove(&2));
        println!("find 7:   {}", list.find(&7));

        let mut dlist: DoublyLinkedList<&str> = ["a", "b", "c"].into_iter().collect();
        dlist.insert(1, "x");
        let back: Vec<&str> = dlist.iter().rev().copied().collect();
        println!("doubly:   {dlist} (backward {back:?})");

        let mut ring: CircularLinkedList<i32> = (1..=4).collect();
        ring.rotate();
        println!("circular: {ring} (closed: {})", ring.walk_closes());
    }

    println!("\n=== Stack / Queue ===");
    {
        let mut stack = Stack::new();
        let mut queue = Queue::new();
        for v in 1..=4 {
            stack.push(v);
            queue.enqueue(v);
        }
        let popped: Vec<i32> = std::iter::from_fn(|| stack.pop().ok()).collect();
        let dequeued: Vec<i32> = std::iter::from_fn(|| queue.dequeue().ok()).collect();
        println!("stack pops:      {popped:?}");
        println!("queue dequeues:  {dequeued:?}");
        if let Err(e) = stack.pop() {
            println!("pop on empty:    {e}");
        }
    }

    println!("\n=== Binary tree ===");
    {
        let tree: BinaryTree<i64> = cfg.tree_values.iter().copied().collect();
        println!("preorder:    {:?}", tree.preorder());
        println!("inorder:     {:?}", tree.inorder());
        println!("postorder:   {:?}", tree.postorder());
        println!("level order: {:?}", tree.level_order());
        println!("height {} / size {}", tree.height(), tree.size());
    }

    println!("\n=== Graph ===");
    {
        let mut graph = Graph::new(cfg.directed);
        for (a, b) in [("A", "B"), ("A", "C"), ("B", "D"), ("C", "E"), ("D", "E"), ("E", "F")] {
            graph.add_edge(a, b);
        }
        graph.add_weighted_edge("A", "F", 5);
        print!("{graph}");
        println!("dfs(A): {:?}", graph.dfs(&"A"));
        println!("bfs(A): {:?}", graph.bfs(&"A"));
    }

    println!("\n=== Hash table ===");
    {
        let mut table = HashTable::with_buckets(cfg.bucket_count)?;
        for (k, v) in [("apple", 3), ("banana", 5), ("cherry", 7), ("elppa", 9)] {
            table.put(k.to_string(), v);
        }
        table.put("apple".to_string(), 4);
        println!("table:       {table}");
        println!("get(apple):  {:?}", table.get(&"apple".to_string()));
        println!("get(grape):  {:?}", table.get(&"grape".to_string()));
        println!("remove(banana): {}", table.remove(&"banana".to_string()));
        println!("chains:      {:?}", table.chain_lengths());
        println!("load factor: {:.2}", table.load_factor());
    }

    println!("\n=== Expression calculator ===");
    {
        let mut calc = ExpressionCalculator::new();
        for expr in &cfg.expressions {
            match calc.evaluate(expr) {
                Ok(v) => println!("{expr} = {v}"),
                Err(e) => println!("{expr} -> error: {e}"),
            }
        }
    }
    Ok(())
}
