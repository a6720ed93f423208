//! Records loaded when a session starts.

use medpay_model::{Cents, NewPayment, Payment, PaymentId, PaymentStatus, Provider, ProviderId};

pub fn sample_providers() -> Vec<Provider> {
    vec![
        Provider::new(
            ProviderId::new(1),
            "City General Hospital",
            "General Medicine",
            "(555) 123-4567",
        ),
        Provider::new(
            ProviderId::new(2),
            "Dr. Smith Cardiology",
            "Cardiology",
            "(555) 234-5678",
        ),
        Provider::new(
            ProviderId::new(3),
            "Downtown Dental Clinic",
            "Dentistry",
            "(555) 345-6789",
        ),
        Provider::new(
            ProviderId::new(4),
            "Vision Care Center",
            "Ophthalmology",
            "(555) 456-7890",
        ),
        Provider::new(
            ProviderId::new(5),
            "Metro Dermatology",
            "Dermatology",
            "(555) 567-8901",
        ),
    ]
}

pub fn sample_payments() -> Vec<Payment> {
    let rows = [
        (1, "2024-01-15", 1, "Annual Physical", 350, 280, PaymentStatus::Paid, "Routine checkup with blood work"),
        (2, "2024-02-03", 3, "Dental Cleaning", 120, 96, PaymentStatus::Paid, "Semi-annual cleaning"),
        (3, "2024-02-20", 2, "Cardiology Consultation", 450, 360, PaymentStatus::Pending, "Follow-up for chest pain"),
        (4, "2024-03-10", 4, "Eye Exam", 180, 144, PaymentStatus::Overdue, "Annual vision screening"),
        (5, "2024-03-25", 5, "Skin Cancer Screening", 275, 220, PaymentStatus::Paid, "Preventive screening"),
    ];

    rows.into_iter()
        .map(|(id, date, provider, service, total, insurance, status, notes)| {
            Payment::new(
                PaymentId::new(id),
                NewPayment::new(
                    date,
                    ProviderId::new(provider),
                    service,
                    Cents::from_parts(total, 0),
                )
                .insurance_coverage(Cents::from_parts(insurance, 0))
                .status(status)
                .notes(notes.to_string()),
            )
        })
        .collect()
}
