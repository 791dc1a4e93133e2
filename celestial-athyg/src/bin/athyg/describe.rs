//! Column layout listing

use crate::cli::DescribeArgs;

pub fn run(args: &DescribeArgs) -> anyhow::Result<()> {
    let fields = args.version.fields();
    println!("=== ATHYG {} ({} columns) ===", args.version, fields.len());
    println!("{:>4}  {:<10}  {:<8}  absent when blank", "pos", "name", "kind");
    for field in fields {
        println!(
            "{:>4}  {:<10}  {:<8}  {}",
            field.position,
            field.name,
            field.kind,
            if field.kind.can_be_absent() { "yes" } else { "no" }
        );
    }
    Ok(())
}
