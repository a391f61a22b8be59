use opentelemetry::{
    global,
    metrics::{Counter, Histogram, Meter, UpDownCounter},
};
use std::sync::LazyLock;

pub static METER: LazyLock<Meter> =
    LazyLock::new(|| global::meter("statement-analysis-assistant"));

// --- LLM Gateway Metrics ---

pub static GEN_AI_TOKEN_USAGE: LazyLock<Histogram<f64>> = LazyLock::new(|| {
    METER
        .f64_histogram("gen_ai.client.token.usage")
        .with_description("Number of tokens used per LLM call")
        .with_unit("{token}")
        .build()
});

pub static GEN_AI_OPERATION_DURATION: LazyLock<Histogram<f64>> = LazyLock::new(|| {
    METER
        .f64_histogram("gen_ai.client.operation.duration")
        .with_description("Duration of LLM operations in seconds")
        .with_unit("s")
        .build()
});

pub static GEN_AI_ERROR_COUNT: LazyLock<Counter<u64>> = LazyLock::new(|| {
    METER
        .u64_counter("gen_ai.client.error.count")
        .with_description("Number of LLM call errors")
        .with_unit("{error}")
        .build()
});

// --- Domain Metrics ---

pub static ANALYSIS_RUN_DURATION: LazyLock<Histogram<f64>> = LazyLock::new(|| {
    METER
        .f64_histogram("analysis.run.duration")
        .with_description("Total analysis run duration in seconds")
        .with_unit("s")
        .build()
});

pub static ANALYSIS_MODULES: LazyLock<Histogram<f64>> = LazyLock::new(|| {
    METER
        .f64_histogram("analysis.modules")
        .with_description("Number of modules analyzed per run")
        .with_unit("{module}")
        .build()
});

pub static SESSIONS_CREATED: LazyLock<Counter<u64>> = LazyLock::new(|| {
    METER
        .u64_counter("sessions.created")
        .with_description("Total sessions created")
        .with_unit("{session}")
        .build()
});

pub static SESSIONS_ACTIVE: LazyLock<UpDownCounter<i64>> = LazyLock::new(|| {
    METER
        .i64_up_down_counter("sessions.active")
        .with_description("Sessions currently held in memory")
        .with_unit("{session}")
        .build()
});

pub static SESSIONS_EXPIRED: LazyLock<Counter<u64>> = LazyLock::new(|| {
    METER
        .u64_counter("sessions.expired")
        .with_description("Sessions dropped after exceeding the idle TTL")
        .with_unit("{session}")
        .build()
});

pub static FILES_UPLOADED: LazyLock<Counter<u64>> = LazyLock::new(|| {
    METER
        .u64_counter("files.uploaded")
        .with_description("Files added to sessions, by upload or sample load")
        .with_unit("{file}")
        .build()
});

// --- HTTP Metrics ---

pub static HTTP_REQUESTS_TOTAL: LazyLock<Counter<u64>> = LazyLock::new(|| {
    METER
        .u64_counter("http.requests.total")
        .with_description("Total number of HTTP requests")
        .with_unit("{request}")
        .build()
});

pub static HTTP_REQUEST_DURATION: LazyLock<Histogram<f64>> = LazyLock::new(|| {
    METER
        .f64_histogram("http.request.duration")
        .with_description("HTTP request duration in milliseconds")
        .with_unit("ms")
        .with_boundaries(vec![
            1.0, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0, 500.0, 1000.0, 2500.0, 5000.0, 10000.0,
        ])
        .build()
});
