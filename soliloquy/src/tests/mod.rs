// Copyright 2026 the Soliloquy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod test_segment;
mod utils;
