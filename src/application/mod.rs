// ============================================================
// Layer 2 - Application Layer (Use Cases)
// ============================================================
// One struct per CLI command. Each use case wires the data, ml
// and infra layers together; none of them parse arguments or
// print to the terminal.
//
//   TrainUseCase   → corpus → vectors, plus run artifacts
//   SimilarUseCase → nearest neighbours in a vector file
//
// Reference: Rust Book §7 (Modules)

/// Full normalise → segment → index → pairs → train → export run
pub mod train_use_case;

/// Cosine nearest-neighbour lookup over exported vectors
pub mod similar_use_case;
