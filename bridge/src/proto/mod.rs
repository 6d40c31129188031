//! OpenCensus wire schema.
//!
//! Prost-generated message types for the `opencensus.proto.*` packages that
//! the agent protocol is built from. The files are checked in so that building
//! the crate does not require `protoc`; regenerate them from the upstream
//! `opencensus-proto` definitions rather than editing them by hand. Indented
//! blocks in the upstream comments are not Rust, so after regenerating they
//! are fenced as `text` to keep them out of the doctests.

#![allow(clippy::all)]
#![allow(clippy::pedantic)]
#![allow(missing_docs)]

pub mod agent {
    //! Agent service request and response types.

    pub mod common {
        //! Node identification shared by the agent services.
        pub mod v1 {
            include!("opencensus.proto.agent.common.v1.rs");
        }
    }

    pub mod trace {
        //! Trace export service.
        pub mod v1 {
            include!("opencensus.proto.agent.trace.v1.rs");
        }
    }

    pub mod metrics {
        //! Metrics export service.
        pub mod v1 {
            include!("opencensus.proto.agent.metrics.v1.rs");
        }
    }
}

pub mod metrics {
    //! Metric types.
    pub mod v1 {
        include!("opencensus.proto.metrics.v1.rs");
    }
}

pub mod resource {
    //! Resource types.
    pub mod v1 {
        include!("opencensus.proto.resource.v1.rs");
    }
}

pub mod trace {
    //! Trace types.
    pub mod v1 {
        include!("opencensus.proto.trace.v1.rs");
    }
}
