#[derive(Debug, Clone, Copy)]
pub struct TransformArgs<'a> {
  /// Module id as the host knows it: a resolved path, possibly with a `?query` suffix.
  pub id: &'a str,
  pub code: &'a str,
}
