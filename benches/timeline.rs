use criterion::{black_box, criterion_group, criterion_main, Criterion};
use delivery_timeline::model::Job;
use delivery_timeline::{reconstruct, select_job};
use serde_json::json;

fn long_haul(branches: usize, fuelings: usize) -> Job {
    let branch_list = (0..branches)
        .map(|index| {
            let delivered = index < branches / 2;
            let (status, arrival, delivery) = if delivered {
                (
                    "delivered",
                    json!({ "arrivedAt": format!("2024-03-01T10:{:02}:00Z", index % 60) }),
                    json!({ "confirmedAt": format!("2024-03-01T11:{:02}:00Z", index % 60) }),
                )
            } else {
                ("pending", json!(null), json!(null))
            };

            json!({
                "branchId": format!("B{index}"),
                "branchName": format!("Branch {index}"),
                "status": status,
                "arrival": arrival,
                "delivery": delivery
            })
        })
        .collect::<Vec<_>>();

    let route_order = (0..branches)
        .rev()
        .map(|index| format!("B{index}"))
        .collect::<Vec<_>>();

    let fueling_list = (0..fuelings)
        .map(|index| {
            json!({
                "station": format!("Pump {index}"),
                "quantity": 100.0,
                "amount": 3500.0,
                "timestamp": format!("2024-03-01T{:02}:30:00Z", 8 + index % 10)
            })
        })
        .collect::<Vec<_>>();

    serde_json::from_value(json!({
        "transportNo": "TR-BENCH",
        "status": "in-delivery",
        "createdAt": "2024-03-01T07:00:00Z",
        "tripStart": { "startedAt": "2024-03-01T08:00:00Z" },
        "depotArrival": { "confirmedAt": "2024-03-01T08:30:00Z" },
        "pickup": { "confirmedAt": "2024-03-01T09:00:00Z" },
        "branches": branch_list,
        "routeOrder": route_order,
        "fuelings": fueling_list
    }))
    .expect("benchmark job is valid")
}

fn timeline(c: &mut Criterion) {
    let small = long_haul(3, 1);
    let large = long_haul(200, 40);

    c.bench_function("reconstruct 3 branches", |b| b.iter(|| reconstruct(black_box(&small))));
    c.bench_function("reconstruct 200 branches", |b| b.iter(|| reconstruct(black_box(&large))));

    let jobs = (0..500).map(|_| small.clone()).collect::<Vec<_>>();
    c.bench_function("select among 500 jobs", |b| b.iter(|| select_job(black_box(&jobs))));
}

criterion_group!(benches, timeline);
criterion_main!(benches);
