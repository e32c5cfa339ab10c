//! Using url::Url as keys in a radix tree
use radix_mutable::StringRadixTree;
use url::Url;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Create a new tree for URL keys and string values
    let mut routes = StringRadixTree::<Url, String>::new();

    // Create some example URLs
    let home = Url::parse("https://example.com/")?;
    let about = Url::parse("https://example.com/about")?;
    let blog = Url::parse("https://example.com/blog")?;
    let blog_post = Url::parse("https://example.com/blog/first-post")?;

    // Insert values associated with each URL
    routes.insert(&home, "Home page".to_string());
    routes.insert(&about, "About us".to_string());
    routes.insert(&blog, "Blog index".to_string());
    routes.insert(&blog_post, "First blog post".to_string());

    // Lookup values by URL
    println!("Looking up URLs:");
    println!("  {} → {:?}", home, routes.get(&home));
    println!("  {} → {:?}", blog, routes.get(&blog));
    println!("  {} → {:?}", blog_post, routes.get(&blog_post));

    // "blog" is a prefix of "blog/first-post", both stay addressable
    routes.remove(&blog);
    let unknown = Url::parse("https://example.com/unknown")?;
    println!("\nAfter removing {}:", blog);
    println!("  {} exists: {}", blog, routes.contains_key(&blog));
    println!("  {} exists: {}", blog_post, routes.contains_key(&blog_post));
    println!("  {} exists: {}", unknown, routes.contains_key(&unknown));

    routes.validate()?;

    Ok(())
}
