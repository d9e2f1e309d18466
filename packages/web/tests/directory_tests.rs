//! Tests for the doctor directory filter and detail navigation.

mod common;

use clinic_web::catalog::Catalog;
use clinic_web::routes::Route;
use clinic_web::state::{filter_roster, DirectoryView, FeaturedDoctors, SpecialtyFilter};
use clinic_web::types::{Doctor, Specialty};
use common::RecordingRouter;

fn doctor(id: u32, name: &str, specialty: Specialty) -> Doctor {
    Doctor {
        id,
        name: name.to_string(),
        specialty,
        image: format!("/assets/doctors/doc{id}.png"),
        available: true,
    }
}

fn small_roster() -> Catalog {
    Catalog::new(vec![
        doctor(1, "Dr. Adams", Specialty::Dentist),
        doctor(2, "Dr. Baker", Specialty::Dermatologist),
        doctor(3, "Dr. Clark", Specialty::Dentist),
    ])
    .unwrap()
}

#[test]
fn dentist_filter_keeps_roster_order() {
    let mut view = DirectoryView::new(small_roster());
    view.select_specialty(SpecialtyFilter::Only(Specialty::Dentist));

    let ids: Vec<u32> = view.filtered_roster().map(|d| d.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn all_shows_everyone() {
    let mut view = DirectoryView::new(small_roster());
    view.select_specialty(SpecialtyFilter::Only(Specialty::Dermatologist));
    view.select_specialty(SpecialtyFilter::All);

    let ids: Vec<u32> = view.filtered_roster().map(|d| d.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn filter_without_matches_is_empty() {
    let mut view = DirectoryView::new(small_roster());
    view.select_specialty(SpecialtyFilter::Only(Specialty::Neurologist));

    assert_eq!(view.filtered_roster().count(), 0);
    assert_eq!(view.count(SpecialtyFilter::Only(Specialty::Neurologist)), 0);
}

#[test]
fn selecting_twice_changes_nothing() {
    let mut view = DirectoryView::new(small_roster());
    let filter = SpecialtyFilter::Only(Specialty::Dentist);

    view.select_specialty(filter);
    let once: Vec<u32> = view.filtered_roster().map(|d| d.id).collect();
    view.select_specialty(filter);
    let twice: Vec<u32> = view.filtered_roster().map(|d| d.id).collect();

    assert_eq!(once, twice);
    assert_eq!(view.selected(), filter);
}

#[test]
fn every_filter_is_a_subset_matching_its_specialty() {
    let catalog = Catalog::seed().unwrap();

    for filter in SpecialtyFilter::variants() {
        let shown: Vec<&Doctor> = filter_roster(catalog.doctors(), filter).collect();

        assert!(shown.len() <= catalog.len());
        if let SpecialtyFilter::Only(specialty) = filter {
            assert!(shown.iter().all(|d| d.specialty == specialty));
        } else {
            assert_eq!(shown.len(), catalog.len());
        }

        // Relative order is preserved
        let positions: Vec<usize> = shown
            .iter()
            .map(|d| catalog.doctors().iter().position(|c| c.id == d.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn specialty_counts_add_up_to_the_roster() {
    let view = DirectoryView::new(Catalog::seed().unwrap());

    let per_specialty: usize = Specialty::ALL
        .into_iter()
        .map(|s| view.count(SpecialtyFilter::Only(s)))
        .sum();

    assert_eq!(per_specialty, view.count(SpecialtyFilter::All));
}

#[test]
fn selecting_a_doctor_routes_to_detail() {
    let view = DirectoryView::new(small_roster());
    let router = RecordingRouter::default();

    view.select_provider(3, &router);

    assert_eq!(*router.visited.borrow(), vec![Route::DoctorDetail { id: 3 }]);
}

#[test]
fn detail_route_path_uses_the_id() {
    assert_eq!(Route::DoctorDetail { id: 7 }.to_string(), "/alldoctors/7");
    assert_eq!(Route::AllDoctors {}.to_string(), "/alldoctors");
}

#[test]
fn featured_grid_filters_before_capping() {
    let mut featured = FeaturedDoctors::new(Catalog::seed().unwrap(), 2);
    featured.select_specialty(SpecialtyFilter::Only(Specialty::Gastroenterologist));

    let shown: Vec<&Doctor> = featured.visible().collect();
    assert_eq!(shown.len(), 2);
    assert!(shown
        .iter()
        .all(|d| d.specialty == Specialty::Gastroenterologist));

    featured.toggle_show_all();
    assert_eq!(
        featured.visible().count(),
        featured
            .directory()
            .count(SpecialtyFilter::Only(Specialty::Gastroenterologist))
    );
}
