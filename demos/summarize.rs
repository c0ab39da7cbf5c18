use review_pipelines::error::Result;
use review_pipelines::loaders::ReviewLoader;
use review_pipelines::review_summary::ReviewSummaryPipelineBuilder;
use review_pipelines::sentiment::Thresholds;

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/demos/reviews.txt").to_string());
    let reviews = ReviewLoader::new(&path).load()?;

    let pipeline = ReviewSummaryPipelineBuilder::new()
        .top_n(5)
        .thresholds(Thresholds::new(0.1, -0.1)?)
        .build()?;

    let output = pipeline.run(&reviews)?;

    println!("Pros:");
    for aspect in &output.pros {
        println!("  {:<16} {}", aspect.term, aspect.count);
    }
    println!("Cons:");
    for aspect in &output.cons {
        println!("  {:<16} {}", aspect.term, aspect.count);
    }
    println!("\n{}", output.summary);
    println!(
        "\n{} reviews ({} positive, {} negative, {} neutral) in {:?}",
        output.stats.reviews_processed,
        output.stats.positive,
        output.stats.negative,
        output.stats.neutral,
        output.stats.total_time
    );
    Ok(())
}
