use async_trait::async_trait;
use catalog::{
  BackendResult, CatalogBackend, DraftField, ListingStats, Price, Product, ProductForm, ProductId, ProductListing,
  ProductPayload, Redirect,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tokio::runtime::Runtime; // To run async code within Criterion

// --- Backend that accepts everything without doing any work ---
struct AcceptAll;

#[async_trait]
impl CatalogBackend for AcceptAll {
  async fn list_products(&self) -> BackendResult<Vec<Product>> {
    Ok(Vec::new())
  }

  async fn find_product(&self, id: ProductId) -> BackendResult<Product> {
    Ok(Product::new(id, "bench", Price::ZERO, ""))
  }

  async fn create_product(&self, _payload: ProductPayload) -> BackendResult<Redirect> {
    Ok(Redirect::to("/products"))
  }

  async fn update_product(&self, _id: ProductId, _payload: ProductPayload) -> BackendResult<Redirect> {
    Ok(Redirect::to("/products"))
  }

  async fn delete_product(&self, _id: ProductId) -> BackendResult<Redirect> {
    Ok(Redirect::to("/products"))
  }
}

fn products(n: usize) -> Vec<Product> {
  (0..n)
    .map(|i| {
      let cents = ((i * 7919) % 1_000_000) as i64;
      Product::new(i as i64, format!("Product {}", i), Price::from_cents(cents).unwrap(), "Bench item")
    })
    .collect()
}

// --- Benchmark Functions ---

fn bench_listing_stats(c: &mut Criterion) {
  let mut group = c.benchmark_group("listing_stats");
  for size in [10usize, 1_000, 100_000] {
    let items = products(size);
    group.throughput(Throughput::Elements(size as u64));
    group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
      b.iter(|| ListingStats::from_products(items));
    });
  }
  group.finish();
}

fn bench_listing_construction(c: &mut Criterion) {
  let items = products(1_000);
  c.bench_function("listing_new_1000", |b| {
    b.iter(|| ProductListing::new(items.clone(), Some("Product created successfully.".to_string())));
  });
}

fn bench_form_submit(c: &mut Criterion) {
  let rt = Runtime::new().unwrap();
  let backend = AcceptAll;
  c.bench_function("create_form_submit", |b| {
    b.to_async(&rt).iter(|| async {
      let form = ProductForm::create();
      form.set_field(DraftField::Name, "Desk Lamp");
      form.set_field(DraftField::Price, "24.99");
      form.submit(&backend).await
    });
  });
}

criterion_group!(
  benches,
  bench_listing_stats,
  bench_listing_construction,
  bench_form_submit
);
criterion_main!(benches);
