pub mod a001_department;
pub mod a002_role;
pub mod a003_tag;
pub mod a004_hs_code;
pub mod a005_isic_code;
pub mod a006_consulting_field;
pub mod a007_staff_member;
