//! Built-in skill vocabulary, course catalogs and video links

use crate::processing::courses::{Course, CourseCatalogs};
use crate::processing::skills::DEFAULT_SKILLS;

pub(super) fn skill_vocabulary() -> Vec<String> {
    DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect()
}

fn courses(entries: &[(&str, &str)]) -> Vec<Course> {
    entries.iter().map(|(name, url)| Course::new(*name, *url)).collect()
}

pub(super) fn course_catalogs() -> CourseCatalogs {
    CourseCatalogs {
        data_science: courses(&[
            ("Machine Learning Crash Course by Google [Free]", "https://developers.google.com/machine-learning/crash-course"),
            ("Machine Learning A-Z by Udemy", "https://www.udemy.com/course/machinelearning/"),
            ("Machine Learning by Andrew NG", "https://www.coursera.org/learn/machine-learning"),
            ("Deep Learning Specialization by DeepLearning.AI", "https://www.coursera.org/specializations/deep-learning"),
            ("Practical Deep Learning for Coders by fast.ai [Free]", "https://course.fast.ai/"),
            ("Data Scientist with Python by DataCamp", "https://www.datacamp.com/tracks/data-scientist-with-python"),
            ("Programming for Data Science with Python by Udacity", "https://www.udacity.com/course/programming-for-data-science-nanodegree--nd104"),
            ("Data Science Foundations: Fundamentals by LinkedIn", "https://www.linkedin.com/learning/data-science-foundations-fundamentals-5"),
        ]),
        web: courses(&[
            ("The Odin Project [Free]", "https://www.theodinproject.com/"),
            ("Full Stack Open by University of Helsinki [Free]", "https://fullstackopen.com/en/"),
            ("MDN Learn Web Development [Free]", "https://developer.mozilla.org/en-US/docs/Learn"),
            ("Responsive Web Design by freeCodeCamp [Free]", "https://www.freecodecamp.org/learn/2022/responsive-web-design/"),
            ("React - The Complete Guide by Udemy", "https://www.udemy.com/course/react-the-complete-guide-incl-redux/"),
            ("Meta Front-End Developer Professional Certificate", "https://www.coursera.org/professional-certificates/meta-front-end-developer"),
            ("Django for Everybody Specialization", "https://www.coursera.org/specializations/django"),
            ("Node.js, Express, MongoDB & More: The Complete Bootcamp", "https://www.udemy.com/course/nodejs-express-mongodb-bootcamp/"),
        ]),
        android: courses(&[
            ("Android Basics with Compose by Google [Free]", "https://developer.android.com/courses/android-basics-compose/course"),
            ("Meta Android Developer Professional Certificate", "https://www.coursera.org/professional-certificates/meta-android-developer"),
            ("Kotlin Bootcamp for Programmers by Udacity [Free]", "https://www.udacity.com/course/kotlin-bootcamp-for-programmers--ud9011"),
            ("Flutter & Dart - The Complete Guide by Udemy", "https://www.udemy.com/course/learn-flutter-dart-to-build-ios-android-apps/"),
            ("Flutter Codelabs [Free]", "https://docs.flutter.dev/codelabs"),
            ("Android Development for Beginners by Udacity [Free]", "https://www.udacity.com/course/android-development-for-beginners--ud837"),
        ]),
        ios: courses(&[
            ("Develop in Swift Tutorials by Apple [Free]", "https://developer.apple.com/tutorials/develop-in-swift"),
            ("SwiftUI Tutorials by Apple [Free]", "https://developer.apple.com/tutorials/swiftui"),
            ("100 Days of SwiftUI by Hacking with Swift [Free]", "https://www.hackingwithswift.com/100/swiftui"),
            ("iOS & Swift - The Complete iOS App Development Bootcamp", "https://www.udemy.com/course/ios-13-app-development-bootcamp/"),
            ("Meta iOS Developer Professional Certificate", "https://www.coursera.org/professional-certificates/meta-ios-developer"),
            ("CS193p - Developing Apps for iOS by Stanford [Free]", "https://cs193p.sites.stanford.edu/"),
        ]),
        uiux: courses(&[
            ("Google UX Design Professional Certificate", "https://www.coursera.org/professional-certificates/google-ux-design"),
            ("UI / UX Design Specialization by CalArts", "https://www.coursera.org/specializations/ui-ux-design"),
            ("Product Design by Udacity [Free]", "https://www.udacity.com/course/product-design--ud509"),
            ("Interaction Design Foundation Courses", "https://www.interaction-design.org/courses"),
            ("Figma Learn [Free]", "https://help.figma.com/hc/en-us/categories/360002051613"),
        ]),
    }
}

pub(super) fn resume_videos() -> Vec<String> {
    vec![
        "https://www.youtube.com/results?search_query=how+to+write+a+resume".to_string(),
        "https://www.youtube.com/results?search_query=ats+friendly+resume+tips".to_string(),
        "https://www.youtube.com/results?search_query=resume+mistakes+to+avoid".to_string(),
    ]
}

pub(super) fn interview_videos() -> Vec<String> {
    vec![
        "https://www.youtube.com/results?search_query=technical+interview+preparation".to_string(),
        "https://www.youtube.com/results?search_query=behavioral+interview+star+method".to_string(),
        "https://www.youtube.com/results?search_query=tell+me+about+yourself+interview".to_string(),
    ]
}
