use disk_head_scheduler::{
    analysis::{HistogramBin, StrategyReport},
    scheduler::{schedule_all, Strategy},
    workload::Workload,
};

#[test]
fn schedules_a_caller_supplied_track_sequence() {
    let workload = Workload::new(vec![50, 91, 10, 25, 63]);
    let schedules = schedule_all(&workload, 50).unwrap();

    let sequences: Vec<(Strategy, Vec<usize>)> = schedules
        .iter()
        .map(|schedule| (schedule.strategy(), schedule.service_sequence().to_vec()))
        .collect();
    assert_eq!(
        sequences,
        vec![
            (Strategy::Fifo, vec![0, 1, 2, 3, 4]),
            (Strategy::Sstf, vec![0, 4, 1, 3, 2]),
            (Strategy::Scan, vec![0, 4, 1, 3, 2]),
            (Strategy::CScan, vec![0, 4, 1, 2, 3]),
        ]
    );
}

#[test]
fn histogram_bins_count_every_request() {
    let workload = Workload::new(vec![50, 91, 10, 25, 63, 99, 0]);
    for schedule in schedule_all(&workload, 50).unwrap() {
        let report = StrategyReport::new(schedule, 100);
        let counts: Vec<usize> = report
            .histogram
            .bins()
            .iter()
            .map(HistogramBin::count)
            .collect();
        assert_eq!(counts, vec![1, 1, 1, 0, 0, 1, 1, 0, 0, 2]);
    }
}
