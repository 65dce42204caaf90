pub use super::classroom::Entity as Classroom;
pub use super::classroom_object::Entity as ClassroomObject;
pub use super::layout_template::Entity as LayoutTemplate;
pub use super::layout_template_object::Entity as LayoutTemplateObject;
pub use super::student::Entity as Student;
pub use super::student_assignment::Entity as StudentAssignment;
