pub mod math;
pub mod rings;
pub mod scheme;
pub mod sweep;

pub use rings::Rq;
pub use scheme::{
    KeyPair, ParameterSet, PrimitiveError, PrimitiveResult, RlwePrimitive,
    TextbookRlwe,
};
pub use sweep::{
    ChartSeries, ChartSink, Clock, ConfigError, FixedClock, JsonChartSink,
    MeasurementRecord, MeasurementRunner, Stage, SweepConfig, SweepError,
    SweepReport, SweepResult, WallClock, run_parameter_sets, run_sweep,
};
